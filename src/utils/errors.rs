use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Contract address must be a non-empty string")]
    InvalidAddress,

    #[error("Failed to fetch contract: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status {0}")]
    HttpStatus(u16),

    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
