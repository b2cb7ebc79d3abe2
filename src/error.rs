use thiserror::Error;

/// A rejected submission. The message is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField,

    #[error("Please enter valid numbers")]
    NonNumericInput,

    #[error("Invalid price input")]
    MalformedPrice,

    #[error("Price cannot be zero")]
    ZeroPrice,
}

#[derive(Debug, Error)]
pub enum AlcError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown volume unit: {0}")]
    UnknownUnit(String),

    #[error("Batch file has no '{0}' column")]
    MissingColumn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AlcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_distinct() {
        let messages = [
            ValidationError::MissingField.to_string(),
            ValidationError::NonNumericInput.to_string(),
            ValidationError::MalformedPrice.to_string(),
            ValidationError::ZeroPrice.to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_validation_wraps_transparently() {
        let err: AlcError = ValidationError::ZeroPrice.into();
        assert_eq!(err.to_string(), "Price cannot be zero");
    }
}
