use log::{debug, info, warn};
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::pages::error::{PageError, PageResult};
use crate::pages::fragment::FragmentKind;
use crate::pages::index::SlugIndex;
use crate::pages::skeleton::{default_document, INDEX_FILE};
use crate::utils::fs;

/// Owns the page directories under `root` and the slug index.
///
/// The index lock only covers index updates. Reading and rewriting a page
/// document is not serialised, so concurrent mutations of the same slug can
/// lose updates; callers that care must not issue them in parallel.
#[derive(Debug)]
pub struct PageRepository {
    root: PathBuf,
    index: Mutex<SlugIndex>,
}

impl PageRepository {
    /// Open a repository rooted at `root`, loading the slug index from `index_path`
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(root: P, index_path: Q) -> Self {
        let index = SlugIndex::load(index_path);
        info!(
            "Loaded {} slug(s) from {}",
            index.slugs().len(),
            index.path().display()
        );

        PageRepository {
            root: root.as_ref().to_path_buf(),
            index: Mutex::new(index),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory backing `slug`, always inside the root.
    ///
    /// Only the slug's plain name components are joined, so a leading `/`,
    /// `.` or `..` cannot move the page outside the root. `None` when nothing
    /// is left to join.
    pub fn page_dir(&self, slug: &str) -> Option<PathBuf> {
        let relative: PathBuf = Path::new(slug)
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part),
                _ => None,
            })
            .collect();

        if relative.as_os_str().is_empty() {
            None
        } else {
            Some(self.root.join(relative))
        }
    }

    /// Create the page directory with the default document and record the slug.
    ///
    /// If writing the document or persisting the index fails, the new
    /// directory is removed again and the slug is dropped from the in-memory
    /// index, so a retry starts from a clean state.
    pub fn create(&self, slug: &str) -> PageResult<PathBuf> {
        let dir = match self.page_dir(slug) {
            Some(dir) if !dir.exists() => dir,
            _ => return Err(PageError::AlreadyExists(slug.to_string())),
        };

        fs::create_directory(&dir)?;
        if let Err(e) = self.populate_and_index(slug, &dir) {
            if let Err(cleanup) = fs::remove_directory(&dir) {
                warn!("Failed to remove partial page {}: {}", dir.display(), cleanup);
            }
            return Err(e);
        }

        info!("Created page '{}' at {}", slug, dir.display());
        Ok(dir)
    }

    fn populate_and_index(&self, slug: &str, dir: &Path) -> PageResult<()> {
        fs::write_file(dir.join(INDEX_FILE), default_document())?;

        let mut index = self.lock_index();
        index.push(slug);
        if let Err(e) = index.persist() {
            index.pop();
            return Err(e.into());
        }
        Ok(())
    }

    /// Remove the page directory and every index entry for the slug.
    ///
    /// The directory is removed first. If persisting the index then fails,
    /// the in-memory index already lacks the slug but the file on disk still
    /// lists it until the next successful create or delete.
    pub fn delete(&self, slug: &str) -> PageResult<()> {
        let dir = match self.page_dir(slug) {
            Some(dir) if dir.exists() => dir,
            _ => return Err(PageError::NotFound(slug.to_string())),
        };

        fs::remove_directory(&dir)?;

        let mut index = self.lock_index();
        let removed = index.remove_all(slug);
        index.persist()?;

        if removed == 0 {
            warn!("Deleted page '{}' which was not in the slug index", slug);
        }
        info!("Deleted page '{}'", slug);
        Ok(())
    }

    /// Snapshot of the in-memory index, in creation order
    pub fn list(&self) -> Vec<String> {
        self.lock_index().slugs().to_vec()
    }

    /// Rewrite one fragment of the page document.
    ///
    /// The document is written back even when the fragment's pattern does not
    /// match, in which case its bytes are unchanged and the call still succeeds.
    pub fn mutate_fragment(&self, slug: &str, kind: FragmentKind, value: &str) -> PageResult<()> {
        let dir = match self.page_dir(slug) {
            Some(dir) if fs::is_directory(&dir) => dir,
            _ => return Err(PageError::NotFound(slug.to_string())),
        };

        let path = dir.join(INDEX_FILE);
        let document = fs::read_file(&path)?;
        if !kind.is_present(&document) {
            warn!("No {} fragment found in page '{}', leaving it unchanged", kind, slug);
        }

        let updated = kind.apply(&document, value);
        fs::write_file(&path, &updated)?;

        debug!("Set {} of page '{}' to {:?}", kind, slug, value);
        Ok(())
    }

    // A poisoned lock still holds a usable list; the panic that poisoned it
    // happened after the last complete push/remove.
    fn lock_index(&self) -> MutexGuard<'_, SlugIndex> {
        self.index.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::{tempdir, TempDir};

    fn repo() -> (TempDir, PageRepository) {
        let dir = tempdir().unwrap();
        let repo = PageRepository::open(dir.path(), dir.path().join("slugs.json"));
        (dir, repo)
    }

    fn has_page(repo: &PageRepository, slug: &str) -> bool {
        repo.page_dir(slug).is_some_and(|dir| dir.is_dir())
    }

    fn read_page(repo: &PageRepository, slug: &str) -> String {
        stdfs::read_to_string(repo.page_dir(slug).unwrap().join(INDEX_FILE)).unwrap()
    }

    #[test]
    fn test_create_writes_default_page_and_indexes_slug() {
        let (_dir, repo) = repo();

        let path = repo.create("foo").unwrap();
        assert!(path.is_dir());
        assert_eq!(read_page(&repo, "foo"), default_document());
        assert_eq!(repo.list(), vec!["foo".to_string()]);
    }

    #[test]
    fn test_create_twice_fails_without_duplicating() {
        let (_dir, repo) = repo();
        repo.create("foo").unwrap();

        let err = repo.create("foo").unwrap_err();
        assert!(matches!(err, PageError::AlreadyExists(ref s) if s == "foo"));
        assert_eq!(repo.list(), vec!["foo".to_string()]);
    }

    #[test]
    fn test_create_refuses_existing_unindexed_directory() {
        let (dir, repo) = repo();
        stdfs::create_dir(dir.path().join("manual")).unwrap();

        assert!(matches!(repo.create("manual"), Err(PageError::AlreadyExists(_))));
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_delete_missing_page_is_not_found() {
        let (_dir, repo) = repo();
        repo.create("keep").unwrap();

        assert!(matches!(repo.delete("nope"), Err(PageError::NotFound(_))));
        assert_eq!(repo.list(), vec!["keep".to_string()]);
    }

    #[test]
    fn test_delete_then_recreate() {
        let (_dir, repo) = repo();
        repo.create("foo").unwrap();
        repo.mutate_fragment("foo", FragmentKind::BodyText, "changed").unwrap();

        repo.delete("foo").unwrap();
        assert!(!has_page(&repo, "foo"));
        assert!(repo.list().is_empty());

        repo.create("foo").unwrap();
        assert_eq!(read_page(&repo, "foo"), default_document());
        assert_eq!(repo.list(), vec!["foo".to_string()]);
    }

    #[test]
    fn test_index_survives_reopen() {
        let (dir, repo) = repo();
        repo.create("a").unwrap();
        repo.create("b").unwrap();
        repo.delete("a").unwrap();
        drop(repo);

        let reopened = PageRepository::open(dir.path(), dir.path().join("slugs.json"));
        assert_eq!(reopened.list(), vec!["b".to_string()]);
    }

    #[test]
    fn test_button_text_leaves_other_fragments() {
        let (_dir, repo) = repo();
        repo.create("foo").unwrap();

        repo.mutate_fragment("foo", FragmentKind::ButtonText, "Hello").unwrap();
        let page = read_page(&repo, "foo");
        assert!(page.contains("<a class='link shake' href='#'>Hello</a>"));
        assert!(page.contains("<p class='user-p'>Your text goes here</p>"));
        assert!(page.contains("<p class='center-p'>Your description goes here</p>"));

        repo.mutate_fragment("foo", FragmentKind::ButtonText, "Hello").unwrap();
        assert_eq!(read_page(&repo, "foo"), page);
    }

    #[test]
    fn test_body_text_end_to_end() {
        let (_dir, repo) = repo();
        repo.create("foo").unwrap();

        repo.mutate_fragment("foo", FragmentKind::BodyText, "Hi there").unwrap();
        assert!(read_page(&repo, "foo").contains("<p class='user-p'>Hi there</p>"));

        repo.mutate_fragment("foo", FragmentKind::DescriptionText, "Short description").unwrap();
        let page = read_page(&repo, "foo");
        assert!(page.contains("<p class='user-p'>Hi there</p>"));
        assert!(page.contains("<p class='center-p'>Short description</p>"));
    }

    #[test]
    fn test_link_rewrites_every_anchor() {
        let (_dir, repo) = repo();
        repo.create("foo").unwrap();
        let path = repo.page_dir("foo").unwrap().join(INDEX_FILE);
        stdfs::write(
            &path,
            "<a class='link shake' href='a'>A</a><a class='link shake' href='b'>B</a>",
        )
        .unwrap();

        repo.mutate_fragment("foo", FragmentKind::LinkHref, "http://x").unwrap();
        assert_eq!(
            stdfs::read_to_string(&path).unwrap(),
            "<a class='link shake' href='http://x'>A</a><a class='link shake' href='http://x'>B</a>"
        );
    }

    #[test]
    fn test_mutation_on_missing_page_writes_nothing() {
        let (dir, repo) = repo();

        for kind in [
            FragmentKind::ButtonText,
            FragmentKind::BodyText,
            FragmentKind::DescriptionText,
            FragmentKind::LinkHref,
        ] {
            assert!(matches!(
                repo.mutate_fragment("ghost", kind, "x"),
                Err(PageError::NotFound(_))
            ));
        }
        assert!(!dir.path().join("ghost").exists());
    }

    #[test]
    fn test_unmatched_pattern_is_silent_noop() {
        let (_dir, repo) = repo();
        repo.create("foo").unwrap();
        let path = repo.page_dir("foo").unwrap().join(INDEX_FILE);
        let custom = "<html><body><p>plain</p></body></html>";
        stdfs::write(&path, custom).unwrap();

        repo.mutate_fragment("foo", FragmentKind::BodyText, "ignored").unwrap();
        repo.mutate_fragment("foo", FragmentKind::LinkHref, "http://ignored").unwrap();
        assert_eq!(stdfs::read_to_string(&path).unwrap(), custom);
    }

    #[test]
    fn test_missing_document_is_io_error() {
        let (_dir, repo) = repo();
        repo.create("foo").unwrap();
        stdfs::remove_file(repo.page_dir("foo").unwrap().join(INDEX_FILE)).unwrap();

        assert!(matches!(
            repo.mutate_fragment("foo", FragmentKind::DescriptionText, "x"),
            Err(PageError::Io(_))
        ));
    }

    #[test]
    fn test_absolute_slug_stays_under_root() {
        let (dir, repo) = repo();
        let outside = tempdir().unwrap();
        let victim = outside.path().join("victim");
        stdfs::create_dir(&victim).unwrap();
        let absolute = victim.to_str().unwrap();

        assert!(matches!(repo.delete(absolute), Err(PageError::NotFound(_))));
        assert!(!has_page(&repo, absolute));
        assert!(matches!(
            repo.mutate_fragment(absolute, FragmentKind::BodyText, "x"),
            Err(PageError::NotFound(_))
        ));
        assert!(victim.is_dir());

        let created = repo.create("/escaped").unwrap();
        assert_eq!(created, dir.path().join("escaped"));
        assert!(created.is_dir());
    }

    #[test]
    fn test_parent_slug_is_not_found() {
        let (dir, repo) = repo();

        assert!(matches!(repo.delete(".."), Err(PageError::NotFound(_))));
        assert!(matches!(repo.delete("."), Err(PageError::NotFound(_))));
        assert!(matches!(repo.create(".."), Err(PageError::AlreadyExists(_))));
        assert!(dir.path().is_dir());
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_create_rolls_back_when_index_write_fails() {
        let dir = tempdir().unwrap();
        let index_path = dir.path().join("slugs.json");
        stdfs::create_dir(&index_path).unwrap();
        let repo = PageRepository::open(dir.path(), &index_path);

        assert!(matches!(repo.create("foo"), Err(PageError::Io(_))));
        assert!(!dir.path().join("foo").exists());
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_delete_with_unwritable_index_keeps_memory_consistent() {
        let (dir, repo) = repo();
        repo.create("foo").unwrap();
        let index_path = dir.path().join("slugs.json");
        stdfs::remove_file(&index_path).unwrap();
        stdfs::create_dir(&index_path).unwrap();

        assert!(matches!(repo.delete("foo"), Err(PageError::Io(_))));
        assert!(!has_page(&repo, "foo"));
        assert!(repo.list().is_empty());
    }
}
