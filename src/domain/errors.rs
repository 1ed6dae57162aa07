use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Order not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Connection, authentication or query failure against the store.
    #[error("Data source error: {0}")]
    DataSource(String),
    #[error("Filesystem error: {0}")]
    Filesystem(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Filesystem(e.to_string())
    }
}
