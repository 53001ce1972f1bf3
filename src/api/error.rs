use log::Level;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL `{0}`")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no country named `{0}`")]
    NotFound(String),
    #[error("no flag image for `{0}`")]
    NoFlag(String),
}

impl ApiError {
    /// Transport failures are errors; everything else is an expected degradation.
    pub fn log_level(&self) -> Level {
        match self {
            Self::Transport(_) => Level::Error,
            _ => Level::Warn,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Cloneable summary of a failed lookup, carried back through a `Message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub level: Level,
    pub message: String,
}

impl LookupFailure {
    pub fn new(country: &str, err: ApiError) -> Self {
        Self {
            level: err.log_level(),
            message: format!("{country}: detail lookup failed ({err})"),
        }
    }

    pub fn log(&self) {
        log::log!(self.level, "{}", self.message);
    }
}
