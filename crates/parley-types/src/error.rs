use thiserror::Error;

/// Errors from inference endpoint operations.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The endpoint could not be reached, or answered with an HTTP error
    /// status.
    #[error("inference endpoint unreachable: {0}")]
    Transport(String),

    /// The endpoint answered, but the body could not be decoded into the
    /// expected structure.
    #[error("malformed inference response: {0}")]
    MalformedResponse(String),
}

/// Errors from transcript persistence.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history write failed: {0}")]
    Io(String),

    #[error("history serialization failed: {0}")]
    Serialize(String),
}

/// Errors from chat-platform gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The platform rejected an outbound send for lack of permission.
    #[error("missing permission: {0}")]
    PermissionDenied(String),

    /// An outbound send failed for any other reason.
    #[error("send failed: {0}")]
    Send(String),

    /// The inbound event connection failed.
    #[error("connection error: {0}")]
    Connection(String),
}

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_error_display() {
        let err = InferenceError::Transport("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "inference endpoint unreachable: connection refused"
        );
    }

    #[test]
    fn test_history_error_display() {
        let err = HistoryError::Io("permission denied".to_string());
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::PermissionDenied("channel c-9".to_string());
        assert_eq!(err.to_string(), "missing permission: channel c-9");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse("expected table".to_string());
        assert_eq!(err.to_string(), "failed to parse config: expected table");
    }
}
