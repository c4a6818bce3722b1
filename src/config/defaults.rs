use std::path::PathBuf;

/// Directory holding page directories
pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Slug index file, relative to the root unless absolute
pub fn default_index_file() -> PathBuf {
    PathBuf::from("slugs.json")
}

/// Address to bind to
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Port used when neither the environment nor the command line sets one
pub fn default_port() -> u16 {
    3000
}
