use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RosterError {
    /// A width or count outside what the identifier scheme can express.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A record disappeared between being read and being written.
    #[error("Record not found: {0}")]
    NotFound(Uuid),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("\"{term}\" matches {count} customers, please be more specific")]
    Ambiguous { term: String, count: usize },

    #[error("{0}")]
    Validation(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
