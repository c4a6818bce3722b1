use std::fs;
use std::io;
use std::path::Path;

/// Check if a path exists and is a directory
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Create a single directory; the parent must already exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> io::Result<()> {
    fs::create_dir(path.as_ref())
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> io::Result<()> {
    fs::remove_dir_all(path.as_ref())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    fs::read_to_string(path.as_ref())
}

/// Write a string to a file, truncating whatever was there
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
    fs::write(path.as_ref(), contents.as_bytes())
}
