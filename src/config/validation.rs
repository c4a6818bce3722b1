use log::info;

use crate::config::Config;
use crate::utils::error::{BoxResult, SlugpagesError};
use crate::utils::fs;

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_root_directory(config)?;
    validate_index_file(config)?;
    Ok(())
}

/// The root must already exist; pages are created directly inside it
fn validate_root_directory(config: &Config) -> BoxResult<()> {
    let root = &config.root;

    if !root.exists() {
        return Err(SlugpagesError::Config(format!(
            "Root directory does not exist: {}", root.display()
        )).into());
    }

    if !fs::is_directory(root) {
        return Err(SlugpagesError::Config(format!(
            "Root path is not a directory: {}", root.display()
        )).into());
    }

    info!("Root directory: {}", root.display());
    Ok(())
}

/// A directory at the index location would make every persist fail
fn validate_index_file(config: &Config) -> BoxResult<()> {
    let index = config.index_path();
    if fs::is_directory(&index) {
        return Err(SlugpagesError::Config(format!(
            "Slug index path is a directory: {}", index.display()
        )).into());
    }
    Ok(())
}
