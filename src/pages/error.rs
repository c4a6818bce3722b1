use axum::http::StatusCode;
use std::error::Error;
use std::fmt;
use std::io;

/// Result type for page repository operations
pub type PageResult<T> = Result<T, PageError>;

/// Failures reported by the page repository
#[derive(Debug)]
pub enum PageError {
    /// A directory for this slug already exists
    AlreadyExists(String),
    /// No directory exists for this slug
    NotFound(String),
    /// Reading or writing a page failed
    Io(io::Error),
}

impl PageError {
    /// HTTP status used when this error ends a request
    pub fn status_code(&self) -> StatusCode {
        match self {
            PageError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::AlreadyExists(slug) => write!(f, "Page '{}' already exists", slug),
            PageError::NotFound(slug) => write!(f, "Page '{}' does not exist", slug),
            PageError::Io(err) => write!(f, "Page file error: {}", err),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PageError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PageError {
    fn from(err: io::Error) -> Self {
        PageError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PageError::AlreadyExists("a".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(PageError::NotFound("a".into()).status_code(), StatusCode::NOT_FOUND);
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(PageError::from(io_err).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_names_the_slug() {
        assert_eq!(PageError::NotFound("foo".into()).to_string(), "Page 'foo' does not exist");
        assert_eq!(PageError::AlreadyExists("foo".into()).to_string(), "Page 'foo' already exists");
    }
}
