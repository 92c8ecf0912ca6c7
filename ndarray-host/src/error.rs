use ndarray_rs::ArrayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Array(#[from] ArrayError),
    #[error("Invalid Dimension: {0}")]
    InvalidDimension(String),
    #[error("Payload Error: {0}")]
    Payload(#[from] serde_json::Error),
}
