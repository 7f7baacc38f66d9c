use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::Filesystem;

/// Filesystem implementation backed by the real disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFilesystem;

impl RealFilesystem {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn ensure_parent_exists(link_path: &Path) -> io::Result<()> {
        if let Some(parent) = link_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn platform_symlink(source: &Path, link_path: &Path) -> io::Result<()> {
        #[cfg(target_family = "unix")]
        std::os::unix::fs::symlink(source, link_path)?;

        // Module sources are directories, so the link is directory-flavored.
        #[cfg(target_family = "windows")]
        std::os::windows::fs::symlink_dir(source, link_path)?;

        Ok(())
    }
}

impl Filesystem for RealFilesystem {
    fn exists(&self, path: &Path) -> bool {
        // lstat, so a dangling symlink still counts as present.
        fs::symlink_metadata(path).is_ok()
    }

    fn create_symlink(&self, source: &Path, link_path: &Path) -> io::Result<()> {
        Self::ensure_parent_exists(link_path)?;
        Self::platform_symlink(source, link_path)
    }

    fn remove_symlink(&self, link_path: &Path) -> io::Result<()> {
        let metadata = fs::symlink_metadata(link_path)?;
        if !metadata.file_type().is_symlink() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a symlink", link_path.display()),
            ));
        }

        #[cfg(target_family = "windows")]
        if fs::metadata(link_path).map(|m| m.is_dir()).unwrap_or(false) {
            return fs::remove_dir(link_path);
        }

        fs::remove_file(link_path)
    }

    fn symlink_target(&self, link_path: &Path) -> Option<PathBuf> {
        fs::read_link(link_path).ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_read_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("module_one");
        let link = dir.path().join("node_modules").join("@module_one");
        fs::create_dir(&source).unwrap();

        let real = RealFilesystem::new();
        real.create_symlink(&source, &link).unwrap();

        assert!(real.exists(&link));
        assert_eq!(real.symlink_target(&link), Some(source));
    }

    #[test]
    fn test_create_symlink_makes_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("module_one");
        let link = dir.path().join("deeply").join("nested").join("@module_one");
        fs::create_dir(&source).unwrap();

        let real = RealFilesystem::new();
        real.create_symlink(&source, &link).unwrap();

        assert!(real.exists(&link));
    }

    #[test]
    fn test_dangling_symlink_still_exists() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("gone");
        let link = dir.path().join("@gone");

        let real = RealFilesystem::new();
        real.create_symlink(&source, &link).unwrap();

        assert!(real.exists(&link));
        assert!(!source.exists());
    }

    #[test]
    fn test_remove_symlink_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("module_one");
        let link = dir.path().join("@module_one");
        fs::create_dir(&source).unwrap();

        let real = RealFilesystem::new();
        real.create_symlink(&source, &link).unwrap();
        real.remove_symlink(&link).unwrap();

        assert!(!real.exists(&link));
        assert!(source.exists());
    }

    #[test]
    fn test_remove_symlink_refuses_regular_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("not_a_link");
        fs::create_dir(&target).unwrap();

        let real = RealFilesystem::new();
        assert!(real.remove_symlink(&target).is_err());
        assert!(target.exists());
    }

    #[test]
    fn test_symlink_target_on_regular_path_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("plain");
        fs::create_dir(&target).unwrap();

        let real = RealFilesystem::new();
        assert_eq!(real.symlink_target(&target), None);
    }
}
