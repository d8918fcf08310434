// Error types shared by the route resolver and the CWMP value codecs

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid CWMP boolean: {0:?}")]
    InvalidBoolean(String),

    #[error("Invalid CWMP dateTime: {0:?}")]
    InvalidDate(String),

    #[error("Invalid parameter value: {0}")]
    InvalidValue(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Convert error to user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Io(_) => {
                "Failed to read the routing table. Check that it exists and is readable.".to_string()
            }
            CoreError::NotFound(what) => {
                format!("No {} found. The device may not have a default route yet.", what)
            }
            CoreError::InvalidBoolean(text) => {
                format!("{:?} is not a CWMP boolean. Use one of 0, 1, true, false.", text)
            }
            CoreError::InvalidDate(text) => {
                format!(
                    "{:?} is not a CWMP dateTime. Use YYYY-MM-DDTHH:MM:SSZ with optional fractional seconds.",
                    text
                )
            }
            CoreError::InvalidValue(msg) => format!("Rejected value: {}", msg),
            CoreError::Config(_) => {
                "Configuration error. Check your config file or command-line arguments.".to_string()
            }
        }
    }

    /// A missing default route, as opposed to a failed table read
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }
}
