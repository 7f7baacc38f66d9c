use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::plan;
use crate::project;
use slink_config::SlinkConfig;
use slink_error::Result;
use slink_fs::{Filesystem, RealFilesystem};

/// Current state of one configured link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    /// The symlink exists and points at the planned source.
    Linked,
    /// Nothing occupies the target path.
    Missing,
    /// The target path is occupied by something else.
    Conflict(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub module: String,
    pub link_name: String,
    pub target_link_path: PathBuf,
    pub state: LinkState,
}

#[derive(Debug, Default)]
pub struct StatusReport {
    pub entries: Vec<StatusEntry>,
}

impl StatusReport {
    #[must_use]
    pub fn linked(&self) -> usize {
        self.count(|state| matches!(state, LinkState::Linked))
    }

    #[must_use]
    pub fn missing(&self) -> usize {
        self.count(|state| matches!(state, LinkState::Missing))
    }

    #[must_use]
    pub fn conflicts(&self) -> usize {
        self.count(|state| matches!(state, LinkState::Conflict(_)))
    }

    fn count(&self, pred: impl Fn(&LinkState) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.state)).count()
    }
}

/// Reports which configured symlinks currently exist. Read-only.
pub struct StatusManager {
    fs: Arc<dyn Filesystem>,
}

impl StatusManager {
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

    pub fn status_dir(
        &self,
        project_dir: &Path,
        config_path: Option<&Path>,
    ) -> Result<StatusReport> {
        let config = project::load_project_config(project_dir, config_path)?;
        self.status(&config)
    }

    pub fn status(&self, config: &SlinkConfig) -> Result<StatusReport> {
        config.validate()?;
        let plans = plan::plan_all(config)?;

        let entries = plans
            .iter()
            .map(|plan| {
                let state = match self.fs.symlink_target(&plan.target_link_path) {
                    Some(target) if target == plan.source_path => LinkState::Linked,
                    Some(target) => {
                        LinkState::Conflict(format!("links to {}", target.display()))
                    }
                    None if self.fs.exists(&plan.target_link_path) => {
                        LinkState::Conflict("occupied by a non-symlink".to_string())
                    }
                    None => LinkState::Missing,
                };

                StatusEntry {
                    module: plan.module.clone(),
                    link_name: plan.link_name.clone(),
                    target_link_path: plan.target_link_path.clone(),
                    state,
                }
            })
            .collect();

        Ok(StatusReport { entries })
    }
}

impl Default for StatusManager {
    fn default() -> Self {
        Self::new()
    }
}
