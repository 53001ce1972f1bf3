pub mod browser;
pub mod detail;

pub use browser::browser_panel;
pub use detail::detail_panel;
