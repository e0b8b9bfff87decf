use thiserror::Error;

#[derive(Debug, Error)]
pub enum RdError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Export failure: {0}")]
    ExportFailure(String),

    #[error("Delivery failure: {0}")]
    DeliveryFailure(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RdError {
    fn from(e: serde_json::Error) -> Self {
        RdError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_field() {
        let err = RdError::InvalidInput {
            field: "email".into(),
            reason: "missing '@'".into(),
        };
        assert_eq!(err.to_string(), "Invalid input: email — missing '@'");
    }

    #[test]
    fn test_serde_json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: RdError = parse.unwrap_err().into();
        assert!(matches!(err, RdError::SerializationError(_)));
    }
}
