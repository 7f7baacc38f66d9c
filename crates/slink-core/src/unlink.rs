use std::path::Path;
use std::sync::Arc;

use crate::plan;
use crate::project;
use slink_config::SlinkConfig;
use slink_error::{Result, SlinkError};
use slink_fs::{Filesystem, RealFilesystem};

/// Result of removing a configuration's symlinks.
#[derive(Debug, Default)]
pub struct UnlinkReport {
    /// Link names whose symlinks were removed.
    pub removed: Vec<String>,
    /// Link names whose target paths were occupied by something other than
    /// a symlink and were left alone.
    pub skipped: Vec<String>,
}

/// Removes the symlinks a configuration would create. The inverse of
/// `LinkManager`.
pub struct UnlinkManager {
    fs: Arc<dyn Filesystem>,
}

impl UnlinkManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fs: Arc::new(RealFilesystem::new()),
        }
    }

    #[must_use]
    pub fn with_filesystem(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }

    pub fn unlink_dir(
        &self,
        project_dir: &Path,
        config_path: Option<&Path>,
        debug: bool,
    ) -> Result<UnlinkReport> {
        let config = project::load_project_config(project_dir, config_path)?;
        self.unlink(&config, debug)
    }

    /// Only symlinks are removed; regular files and directories at a target
    /// path are reported as skipped.
    pub fn unlink(&self, config: &SlinkConfig, debug: bool) -> Result<UnlinkReport> {
        config.validate()?;
        let plans = plan::plan_all(config)?;
        let mut report = UnlinkReport::default();

        for plan in &plans {
            if self.fs.symlink_target(&plan.target_link_path).is_some() {
                self.fs
                    .remove_symlink(&plan.target_link_path)
                    .map_err(|e| {
                        SlinkError::IoError(format!(
                            "failed to remove {}: {e}",
                            plan.target_link_path.display()
                        ))
                    })?;
                slink_logger::success(&format!("Removed symlink for module '{}'.", plan.module));
                report.removed.push(plan.link_name.clone());
            } else if self.fs.exists(&plan.target_link_path) {
                slink_logger::warn(&format!(
                    "{} is not a symlink. Leaving it alone.",
                    plan.target_link_path.display()
                ));
                report.skipped.push(plan.link_name.clone());
            } else {
                slink_logger::debug(
                    &format!("No symlink at {}", plan.target_link_path.display()),
                    debug,
                );
            }
        }

        slink_logger::finish(&format!("Removed {} symlinks", report.removed.len()));
        Ok(report)
    }
}

impl Default for UnlinkManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use slink_config::ModuleEntry;
    use slink_fs::MemoryFilesystem;
    use std::path::PathBuf;

    fn test_config(modules: Vec<ModuleEntry>) -> SlinkConfig {
        let mut config = SlinkConfig::new("/srv/modules");
        config.node_modules_path = PathBuf::from("/srv/app/node_modules");
        config.modules = modules;
        config
    }

    fn manager(fs: &Arc<MemoryFilesystem>) -> UnlinkManager {
        UnlinkManager::with_filesystem(Arc::clone(fs) as Arc<dyn Filesystem>)
    }

    #[test]
    fn test_removes_only_existing_links() {
        let fs = Arc::new(MemoryFilesystem::new());
        fs.add_link(
            "/srv/app/node_modules/@module_one",
            "/srv/modules/module_one",
        );
        let config = test_config(vec![
            ModuleEntry::from("module_one"),
            ModuleEntry::from("module_three"),
        ]);

        let report = manager(&fs).unlink(&config, false).unwrap();

        assert_eq!(report.removed, ["module_one"]);
        assert!(report.skipped.is_empty());
        assert!(!fs.exists(Path::new("/srv/app/node_modules/@module_one")));
    }

    #[test]
    fn test_leaves_non_symlinks_alone() {
        let fs = Arc::new(MemoryFilesystem::new());
        fs.add_entry("/srv/app/node_modules/@module_one");
        let config = test_config(vec![ModuleEntry::from("module_one")]);

        let report = manager(&fs).unlink(&config, false).unwrap();

        assert!(report.removed.is_empty());
        assert_eq!(report.skipped, ["module_one"]);
        assert!(fs.exists(Path::new("/srv/app/node_modules/@module_one")));
    }

    #[test]
    fn test_unlink_after_link_round_trip() {
        let fs = Arc::new(MemoryFilesystem::new());
        fs.add_link(
            "/srv/app/node_modules/@module_one_alias",
            "/srv/modules/module_one",
        );
        let config = test_config(vec![ModuleEntry::aliased("module_one", "module_one_alias")]);

        let report = manager(&fs).unlink(&config, false).unwrap();

        assert_eq!(report.removed, ["module_one_alias"]);
    }
}
