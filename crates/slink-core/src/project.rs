use std::path::Path;

use slink_config::SlinkConfig;
use slink_constants::CONFIG_FILE;
use slink_error::{Result, SlinkError};

/// Loads the project's slink configuration, honoring an explicit override
/// path when one is given.
pub fn load_project_config(
    project_dir: &Path,
    config_path: Option<&Path>,
) -> Result<SlinkConfig> {
    let path = config_path.map_or_else(|| project_dir.join(CONFIG_FILE), Path::to_path_buf);

    if !path.exists() {
        return Err(SlinkError::ConfigMissing(path.display().to_string()));
    }

    SlinkConfig::load(&path).map_err(|e| SlinkError::ConfigInvalid(e.to_string()))
}
