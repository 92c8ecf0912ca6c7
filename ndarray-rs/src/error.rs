use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("Cast Error: {0}")]
    CastError(String),
    #[error("Index Out of Bounds: {0}")]
    IndexOutOfBounds(String),
    #[error("Invalid Shape: {0}")]
    InvalidShape(String),
    #[error("Shape Mismatch: {0}")]
    ShapeMismatch(String),
    #[error("Unknown DType: {0}")]
    UnknownDType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_keeps_detail() {
        let err = ArrayError::ShapeMismatch("cannot reshape array of size 6 into shape [2, 4]".to_string());
        assert_eq!(
            err.to_string(),
            "Shape Mismatch: cannot reshape array of size 6 into shape [2, 4]"
        );
    }
}
