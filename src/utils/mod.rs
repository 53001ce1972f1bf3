pub mod formatting;

pub use formatting::{card_title, detail_rows, DetailRow};
