use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Ordered list of known slugs, mirrored to a JSON file.
///
/// The file is read once by [`SlugIndex::load`] and only written afterwards.
/// Edits made to it by anyone else while the process runs are not seen.
#[derive(Debug, Clone)]
pub struct SlugIndex {
    path: PathBuf,
    slugs: Vec<String>,
}

impl SlugIndex {
    /// Load the index from `path`.
    ///
    /// A missing or unparsable file yields an empty index; this never fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let slugs = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<String>>(&content) {
                Ok(slugs) => slugs,
                Err(e) => {
                    warn!("Ignoring unreadable slug index {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No slug index at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read slug index {}: {}", path.display(), e);
                Vec::new()
            }
        };

        SlugIndex { path, slugs }
    }

    /// Location of the persisted file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }

    /// Append a slug; duplicates are not filtered here
    pub fn push(&mut self, slug: &str) {
        self.slugs.push(slug.to_string());
    }

    /// Drop the most recently pushed slug
    pub fn pop(&mut self) -> Option<String> {
        self.slugs.pop()
    }

    /// Remove every occurrence of `slug`, returning how many were dropped
    pub fn remove_all(&mut self, slug: &str) -> usize {
        let before = self.slugs.len();
        self.slugs.retain(|s| s != slug);
        before - self.slugs.len()
    }

    /// Rewrite the whole file with the current list
    pub fn persist(&self) -> io::Result<()> {
        let data = serde_json::to_string(&self.slugs)?;
        fs::write(&self.path, data)?;
        debug!("Persisted {} slug(s) to {}", self.slugs.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let index = SlugIndex::load(dir.path().join("slugs.json"));
        assert!(index.slugs().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("slugs.json");
        fs::write(&path, "{not json").unwrap();

        assert!(SlugIndex::load(&path).slugs().is_empty());

        fs::write(&path, r#"{"slugs": ["a"]}"#).unwrap();
        assert!(SlugIndex::load(&path).slugs().is_empty());
    }

    #[test]
    fn test_persist_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("slugs.json");

        let mut index = SlugIndex::load(&path);
        index.push("foo");
        index.push("bar");
        index.persist().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["foo","bar"]"#);

        let reloaded = SlugIndex::load(&path);
        assert_eq!(reloaded.slugs(), &["foo".to_string(), "bar".to_string()]);
    }

    #[test]
    fn test_remove_all_drops_duplicates() {
        let dir = tempdir().unwrap();
        let mut index = SlugIndex::load(dir.path().join("slugs.json"));
        index.push("a");
        index.push("b");
        index.push("a");

        assert_eq!(index.remove_all("a"), 2);
        assert_eq!(index.slugs(), &["b".to_string()]);
        assert!(!index.slugs().iter().any(|s| s == "a"));
        assert_eq!(index.remove_all("missing"), 0);
    }

    #[test]
    fn test_pop_undoes_push() {
        let dir = tempdir().unwrap();
        let mut index = SlugIndex::load(dir.path().join("slugs.json"));
        index.push("a");
        index.push("b");

        assert_eq!(index.pop(), Some("b".to_string()));
        assert_eq!(index.slugs(), &["a".to_string()]);
    }
}
