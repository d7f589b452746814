use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookingError>;

#[derive(Error, Debug)]
pub enum BookingError {
    /// Rendering the payment code failed. Fatal to the current booking
    /// attempt only; the session loop keeps running.
    #[error("payment failed: {0}")]
    Payment(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}
