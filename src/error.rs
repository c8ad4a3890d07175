//! Error types for the image_color_scheme library

use thiserror::Error;

/// Result type alias for image_color_scheme operations
pub type Result<T> = std::result::Result<T, ColorSchemeError>;

/// Error kinds raised by color extraction and palette generation
#[derive(Error, Debug)]
pub enum ColorSchemeError {
    /// Empty or malformed input data (pixel buffer, color list, hex string)
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Argument outside its accepted domain
    #[error("Invalid argument: {parameter} = {value}")]
    InvalidArgument { parameter: String, value: String },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorSchemeError {
    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error for `parameter` holding `value`
    pub fn invalid_argument(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error was caused by the caller's data rather than its arguments
    pub fn is_input_error(&self) -> bool {
        matches!(self, ColorSchemeError::InvalidInput { .. })
    }
}
