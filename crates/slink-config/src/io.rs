use std::path::{Path, PathBuf};

use crate::SlinkConfig;
use slink_constants::CONFIG_FILE;

/// The canonical location of `slink.json` inside a project directory.
#[must_use]
pub fn config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_FILE)
}

pub fn read_slink_config(project_dir: &Path) -> anyhow::Result<SlinkConfig> {
    SlinkConfig::load(&config_path(project_dir))
}

pub fn write_slink_config(project_dir: &Path, config: &SlinkConfig) -> anyhow::Result<()> {
    config.save(&config_path(project_dir))
}
