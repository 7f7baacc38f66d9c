pub mod memory;
pub mod real;

pub use memory::MemoryFilesystem;
pub use real::RealFilesystem;

use std::io;
use std::path::{Path, PathBuf};

/// Filesystem capability needed by the link managers.
///
/// Abstracting symlink operations behind this trait keeps orchestration
/// deterministic under test without touching the real disk.
pub trait Filesystem: Send + Sync {
    /// Returns `true` if anything exists at `path`. A symlink at `path`
    /// counts even when its target is gone.
    fn exists(&self, path: &Path) -> bool;

    /// Creates a symlink at `link_path` pointing to `source`.
    fn create_symlink(&self, source: &Path, link_path: &Path) -> io::Result<()>;

    /// Removes the symlink at `link_path`. Fails if the path is occupied by
    /// anything other than a symlink.
    fn remove_symlink(&self, link_path: &Path) -> io::Result<()>;

    /// Returns the target of the symlink at `link_path`, or `None` if the
    /// path is not a symlink.
    fn symlink_target(&self, link_path: &Path) -> Option<PathBuf>;
}
