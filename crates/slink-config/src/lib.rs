pub mod entry;
pub mod io;

pub use entry::ModuleEntry;
pub use io::{config_path, read_slink_config, write_slink_config};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use slink_constants::{DEFAULT_NODE_MODULES_DIR, DEFAULT_SYMLINK_PREFIX};

/// Configuration for one linking run, read from `slink.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlinkConfig {
    /// Modules to expose under the node_modules directory.
    #[serde(default)]
    pub modules: Vec<ModuleEntry>,
    /// Base directory under which all module sources reside.
    pub modules_base_path: PathBuf,
    /// String prepended to every link name.
    #[serde(default = "default_symlink_prefix")]
    pub symlink_prefix: String,
    /// Directory the symlinks are created under.
    #[serde(default = "default_node_modules_path")]
    pub node_modules_path: PathBuf,
}

fn default_symlink_prefix() -> String {
    DEFAULT_SYMLINK_PREFIX.to_string()
}

fn default_node_modules_path() -> PathBuf {
    PathBuf::from(DEFAULT_NODE_MODULES_DIR)
}

impl SlinkConfig {
    #[must_use]
    pub fn new(modules_base_path: impl Into<PathBuf>) -> Self {
        Self {
            modules: Vec::new(),
            modules_base_path: modules_base_path.into(),
            symlink_prefix: default_symlink_prefix(),
            node_modules_path: default_node_modules_path(),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.modules_base_path.as_os_str().is_empty() {
            anyhow::bail!("modulesBasePath must not be empty");
        }
        if self.node_modules_path.as_os_str().is_empty() {
            anyhow::bail!("nodeModulesPath must not be empty");
        }
        Ok(())
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let parsed: Self = serde_json::from_str(&content)?;
        Ok(parsed)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let config = SlinkConfig::new("./modules");
        assert!(config.modules.is_empty());
        assert_eq!(config.symlink_prefix, "@");
        assert_eq!(config.node_modules_path, PathBuf::from("./node_modules"));
    }

    #[test]
    fn test_parse_applies_defaults() {
        let config: SlinkConfig =
            serde_json::from_str(r#"{"modulesBasePath": "./modules"}"#).unwrap();
        assert!(config.modules.is_empty());
        assert_eq!(config.symlink_prefix, "@");
        assert_eq!(config.node_modules_path, PathBuf::from("./node_modules"));
    }

    #[test]
    fn test_parse_mixed_module_entries() {
        let config: SlinkConfig = serde_json::from_str(
            r#"{
                "modules": [
                    "module_one",
                    {"module": "module_four/a/nested", "alias": "nested_alias"}
                ],
                "modulesBasePath": "/srv/modules",
                "symlinkPrefix": "",
                "nodeModulesPath": "/srv/app/node_modules"
            }"#,
        )
        .unwrap();
        assert_eq!(config.modules.len(), 2);
        assert_eq!(config.symlink_prefix, "");
        assert_eq!(
            config.modules[1],
            ModuleEntry::aliased("module_four/a/nested", "nested_alias")
        );
    }

    #[test]
    fn test_parse_rejects_non_array_modules() {
        let result: Result<SlinkConfig, _> = serde_json::from_str(
            r#"{"modules": "not-an-array", "modulesBasePath": "./modules"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_missing_base_path() {
        let result: Result<SlinkConfig, _> = serde_json::from_str(r#"{"modules": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_base_path() {
        let config = SlinkConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_node_modules_path() {
        let mut config = SlinkConfig::new("./modules");
        config.node_modules_path = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
