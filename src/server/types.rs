use std::error::Error;
use std::sync::Arc;

use crate::pages::PageRepository;

/// Common result type for server operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// State shared with every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub repository: Arc<PageRepository>,
}

impl AppState {
    pub fn new(repository: Arc<PageRepository>) -> Self {
        AppState { repository }
    }
}
