//! Test-only helpers: a scripted formatter and a temp directory tree builder.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::types::Outcome;
use crate::io::formatter::Formatter;

/// Formatter that returns a fixed outcome and records every workdir it was asked to check.
pub struct ScriptedFormatter {
    outcome: Outcome,
    workdirs: RefCell<Vec<PathBuf>>,
}

impl ScriptedFormatter {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            workdirs: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.workdirs.borrow().len()
    }

    pub fn workdirs(&self) -> Vec<PathBuf> {
        self.workdirs.borrow().clone()
    }
}

impl Formatter for ScriptedFormatter {
    fn check(&self, workdir: &Path) -> Result<Outcome> {
        self.workdirs.borrow_mut().push(workdir.to_path_buf());
        Ok(self.outcome.clone())
    }
}

/// Temporary directory tree that is removed on drop.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty file at `rel`, creating parent directories.
    pub fn touch(&self, rel: &str) -> Result<PathBuf> {
        self.write(rel, "")
    }

    pub fn write(&self, rel: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
