use std::path::{Path, PathBuf};

use slink_config::SlinkConfig;
use slink_constants::{CONFIG_FILE, DEFAULT_MODULES_DIR};
use slink_error::{Result, SlinkError};

pub struct InitManager;

impl InitManager {
    #[must_use]
    pub fn new() -> Self {
        InitManager
    }

    /// Writes a starter `slink.json`. Refuses to overwrite an existing one
    /// unless `force` is set.
    pub fn init_config(
        &self,
        project_dir: &Path,
        modules_base_path: Option<&Path>,
        force: bool,
    ) -> Result<()> {
        let config_path = project_dir.join(CONFIG_FILE);

        if config_path.exists() && !force {
            return Err(SlinkError::ConfigExists(
                config_path.display().to_string(),
            ));
        }

        let base = modules_base_path
            .map_or_else(|| PathBuf::from(DEFAULT_MODULES_DIR), Path::to_path_buf);
        let config = SlinkConfig::new(base);
        config
            .save(&config_path)
            .map_err(|e| SlinkError::IoError(e.to_string()))?;

        slink_logger::info(&format!(
            "Initialized {CONFIG_FILE} in {}",
            project_dir.display()
        ));
        Ok(())
    }
}

impl Default for InitManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_starter_config() {
        let dir = tempfile::tempdir().unwrap();

        InitManager::new()
            .init_config(dir.path(), None, false)
            .unwrap();

        let config = slink_config::read_slink_config(dir.path()).unwrap();
        assert!(config.modules.is_empty());
        assert_eq!(config.modules_base_path, PathBuf::from("./modules"));
        assert_eq!(config.symlink_prefix, "@");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let manager = InitManager::new();
        manager.init_config(dir.path(), None, false).unwrap();

        let err = manager
            .init_config(dir.path(), Some(Path::new("./local")), false)
            .unwrap_err();
        assert!(matches!(err, SlinkError::ConfigExists(_)));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let manager = InitManager::new();
        manager.init_config(dir.path(), None, false).unwrap();
        manager
            .init_config(dir.path(), Some(Path::new("./local")), true)
            .unwrap();

        let config = slink_config::read_slink_config(dir.path()).unwrap();
        assert_eq!(config.modules_base_path, PathBuf::from("./local"));
    }
}
