//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level text that is not one of the accepted tokens
    #[error("invalid level: '{token}'")]
    InvalidLevel { token: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A handler could not process a batch of messages
    #[error("Handler '{name}' failed: {message}")]
    HandlerError { name: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid level error for the rejected token
    pub fn invalid_level(token: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            token: token.into(),
        }
    }

    /// Create a handler error
    pub fn handler(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::HandlerError {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("xxxx");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err = LoggerError::handler("memory", "poisoned");
        assert!(matches!(err, LoggerError::HandlerError { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("verbose");
        assert_eq!(err.to_string(), "invalid level: 'verbose'");

        let err = LoggerError::handler("json", "broken pipe");
        assert_eq!(err.to_string(), "Handler 'json' failed: broken pipe");

        let err = LoggerError::other("something else");
        assert_eq!(err.to_string(), "something else");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
