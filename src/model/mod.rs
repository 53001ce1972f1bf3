pub mod catalog;
pub mod country;
pub mod panels;
pub mod selection;
pub mod state;

pub use catalog::Catalog;
pub use country::{CountryDetail, CountryRecord, Currency, FlagUrls};
pub use panels::{DetailPanel, FlagCard, FlagImage};
pub use selection::{sample_catalog, Selection};
pub use state::ViewState;
