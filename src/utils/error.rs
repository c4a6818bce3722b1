use std::error::Error;
use std::fmt;

/// Common result type for startup and configuration code
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Errors raised while preparing the service, before any request is handled
#[derive(Debug)]
pub enum SlugpagesError {
    /// Configuration error
    Config(String),
}

impl fmt::Display for SlugpagesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugpagesError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for SlugpagesError {}
