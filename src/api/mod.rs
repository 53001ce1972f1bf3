pub mod client;
pub mod error;

pub use client::CountryApi;
pub use error::{ApiError, LookupFailure, Result};
