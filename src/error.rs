//! Error types for the dialog component.

use thiserror::Error;

/// Dialog-specific error types
#[derive(Debug, Error)]
pub enum DialogError {
    /// A configuration value was rejected at construction time
    #[error("Invalid dialog configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for dialog operations
pub type DialogResult<T> = std::result::Result<T, DialogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = DialogError::InvalidConfig("backdrop opacity 2 outside [0.0, 1.0]".into());
        assert_eq!(
            err.to_string(),
            "Invalid dialog configuration: backdrop opacity 2 outside [0.0, 1.0]"
        );
    }
}
