pub mod init;
pub mod link;
pub mod plan;
mod project;
pub mod report;
pub mod resolve;
pub mod status;
pub mod tracker;
pub mod unlink;

pub use init::InitManager;
pub use link::LinkManager;
pub use status::StatusManager;
pub use unlink::UnlinkManager;

use std::path::Path;

use slink_config::SlinkConfig;
use slink_error::Result;

pub fn link_project(
    project_dir: &str,
    config_path: Option<&Path>,
    debug: bool,
) -> Result<report::LinkReport> {
    let manager = LinkManager::new();
    manager.link_dir(Path::new(project_dir), config_path, debug)
}

pub fn link_config(config: &SlinkConfig, debug: bool) -> Result<report::LinkReport> {
    let manager = LinkManager::new();
    manager.link(config, debug)
}

pub fn status_project(
    project_dir: &str,
    config_path: Option<&Path>,
) -> Result<status::StatusReport> {
    let manager = StatusManager::new();
    manager.status_dir(Path::new(project_dir), config_path)
}

pub fn unlink_project(
    project_dir: &str,
    config_path: Option<&Path>,
    debug: bool,
) -> Result<unlink::UnlinkReport> {
    let manager = UnlinkManager::new();
    manager.unlink_dir(Path::new(project_dir), config_path, debug)
}

pub fn init_config(
    project_dir: &str,
    modules_base_path: Option<&Path>,
    force: bool,
) -> Result<()> {
    let manager = InitManager::new();
    manager.init_config(Path::new(project_dir), modules_base_path, force)
}
