use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedalError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Fetch failed with status code {status}")]
    Fetch { status: u16 },
}

/// Why a single country row could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("missing {0}")]
    MissingField(&'static str),
    #[error("invalid {field} value {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// A record that one ranking has and the other lacks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("country {country:?} is missing from the {missing_from} ranking")]
pub struct JoinMismatch {
    pub country: String,
    pub missing_from: &'static str,
}

pub type Result<T> = std::result::Result<T, MedalError>;
