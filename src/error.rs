use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Invalid joining date: {0:?}")]
    InvalidDate(String),

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
