//! Best-effort walk of the working tree for files the formatter cares about.
//!
//! The result only gates whether the formatter runs at all, so unreadable
//! subtrees are skipped instead of failing the hook.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::core::extensions::{has_allowed_extension, is_ignored_dir};

/// Files found under a root, in directory-listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    /// Entries that could not be read (mostly unlistable directories).
    pub skipped: usize,
}

impl Discovery {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Depth-first walk of `root`, skipping ignored directory names and
/// symlinks. The root itself is always entered.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn discover(root: &Path) -> Discovery {
    let mut discovery = Discovery::default();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !is_ignored_dir(entry.file_name())
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(err = %err, "skipping unreadable entry");
                discovery.skipped += 1;
                continue;
            }
        };
        if entry.file_type().is_file() && has_allowed_extension(entry.path()) {
            discovery.files.push(entry.into_path());
        }
    }

    debug!(
        files = discovery.files.len(),
        skipped = discovery.skipped,
        "discovery finished"
    );
    discovery
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(path, "").expect("write");
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let discovery = discover(temp.path());
        assert!(discovery.is_empty());
        assert_eq!(discovery.skipped, 0);
    }

    #[test]
    fn finds_nested_matching_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "a.ts");
        touch(temp.path(), "src/components/Button.tsx");
        touch(temp.path(), "docs/guide.md");
        touch(temp.path(), "src/main.rs");
        touch(temp.path(), "notes.txt");

        let mut files: Vec<PathBuf> = discover(temp.path())
            .files
            .into_iter()
            .map(|path| path.strip_prefix(temp.path()).expect("prefix").to_path_buf())
            .collect();
        files.sort();
        assert_eq!(
            files,
            vec![
                PathBuf::from("a.ts"),
                PathBuf::from("docs/guide.md"),
                PathBuf::from("src/components/Button.tsx"),
            ]
        );
    }

    #[test]
    fn ignored_directories_are_not_entered() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "node_modules/app.js");
        touch(temp.path(), "node_modules/pkg/index.ts");
        touch(temp.path(), ".git/hooks/x.json");
        touch(temp.path(), "packages/web/dist/bundle.js");
        assert!(discover(temp.path()).is_empty());
    }

    #[test]
    fn ignored_name_as_file_still_counts() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(temp.path().join("src")).expect("mkdir");
        fs::write(temp.path().join("src").join("build"), "").expect("write");
        touch(temp.path(), "src/build.ts");
        assert_eq!(discover(temp.path()).files.len(), 1);
    }

    #[test]
    fn root_with_ignored_name_is_still_walked() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "build/a.ts");
        let discovery = discover(&temp.path().join("build"));
        assert_eq!(discovery.files.len(), 1);
    }

    #[test]
    fn repeated_discovery_is_stable() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "a.ts");
        touch(temp.path(), "b/c.css");
        touch(temp.path(), "b/d/e.yaml");
        let first = discover(temp.path());
        let second = discover(temp.path());
        assert_eq!(first.files.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_root_is_skipped_not_fatal() {
        let temp = tempfile::tempdir().expect("tempdir");
        let discovery = discover(&temp.path().join("gone"));
        assert!(discovery.is_empty());
        assert_eq!(discovery.skipped, 1);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subtree_does_not_stop_the_walk() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().expect("tempdir");
        touch(temp.path(), "ok/a.ts");
        touch(temp.path(), "locked/b.ts");
        let locked = temp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

        let discovery = discover(temp.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod back");

        assert!(
            discovery
                .files
                .iter()
                .any(|path| path.ends_with("ok/a.ts"))
        );
        // Root can list anything; only assert the skip when permissions applied.
        if !discovery.files.iter().any(|path| path.ends_with("locked/b.ts")) {
            assert_eq!(discovery.skipped, 1);
        }
    }
}
