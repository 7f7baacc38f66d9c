use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::Filesystem;

/// In-memory filesystem double for exercising the link managers without
/// touching the disk.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    /// Paths occupied by something other than a symlink.
    entries: BTreeSet<PathBuf>,
    /// Symlinks, keyed by link path.
    links: BTreeMap<PathBuf, PathBuf>,
    /// Link paths whose creation is forced to fail.
    fail_on: BTreeSet<PathBuf>,
    operations: Vec<String>,
}

impl MemoryFilesystem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a non-symlink entry at `path`.
    pub fn add_entry(&self, path: impl Into<PathBuf>) {
        if let Ok(mut state) = self.state.lock() {
            state.entries.insert(path.into());
        }
    }

    /// Seeds an existing symlink from `link_path` to `source`.
    pub fn add_link(&self, link_path: impl Into<PathBuf>, source: impl Into<PathBuf>) {
        if let Ok(mut state) = self.state.lock() {
            state.links.insert(link_path.into(), source.into());
        }
    }

    /// Makes `create_symlink` fail for `link_path`.
    pub fn fail_on(&self, link_path: impl Into<PathBuf>) {
        if let Ok(mut state) = self.state.lock() {
            state.fail_on.insert(link_path.into());
        }
    }

    #[must_use]
    pub fn links(&self) -> Vec<(PathBuf, PathBuf)> {
        self.state
            .lock()
            .map(|state| state.links.iter().map(|(l, s)| (l.clone(), s.clone())).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn link_target(&self, link_path: &Path) -> Option<PathBuf> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.links.get(link_path).cloned())
    }

    /// Number of filesystem calls made through the trait.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.state
            .lock()
            .map(|state| state.operations.len())
            .unwrap_or_default()
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| io::Error::other("filesystem state lock poisoned"))
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let Ok(mut state) = self.lock() else {
            return false;
        };
        state.operations.push(format!("exists {}", path.display()));
        state.entries.contains(path) || state.links.contains_key(path)
    }

    fn create_symlink(&self, source: &Path, link_path: &Path) -> io::Result<()> {
        let mut state = self.lock()?;
        state
            .operations
            .push(format!("create_symlink {}", link_path.display()));

        if state.fail_on.contains(link_path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", link_path.display()),
            ));
        }
        if state.entries.contains(link_path) || state.links.contains_key(link_path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", link_path.display()),
            ));
        }

        state
            .links
            .insert(link_path.to_path_buf(), source.to_path_buf());
        Ok(())
    }

    fn remove_symlink(&self, link_path: &Path) -> io::Result<()> {
        let mut state = self.lock()?;
        state
            .operations
            .push(format!("remove_symlink {}", link_path.display()));

        if state.entries.contains(link_path) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a symlink", link_path.display()),
            ));
        }
        if state.links.remove(link_path).is_none() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", link_path.display()),
            ));
        }
        Ok(())
    }

    fn symlink_target(&self, link_path: &Path) -> Option<PathBuf> {
        let Ok(mut state) = self.lock() else {
            return None;
        };
        state
            .operations
            .push(format!("symlink_target {}", link_path.display()));
        state.links.get(link_path).cloned()
    }
}
