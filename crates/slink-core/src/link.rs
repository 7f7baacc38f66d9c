use std::path::Path;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Mutex;

use crate::plan::{self, LinkPlan};
use crate::project;
use crate::report::{LinkFailure, LinkOutcome, LinkReport, LinkedModule};
use crate::tracker::CompletionTracker;
use slink_config::SlinkConfig;
use slink_error::{Result, SlinkError};
use slink_fs::{Filesystem, RealFilesystem};

/// Drives concurrent symlink creation for all configured modules.
pub struct LinkManager {
    fs: Arc<dyn Filesystem>,
}

impl LinkManager {
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

    /// Links the modules configured in the project's `slink.json`.
    pub fn link_dir(
        &self,
        project_dir: &Path,
        config_path: Option<&Path>,
        debug: bool,
    ) -> Result<LinkReport> {
        let config = project::load_project_config(project_dir, config_path)?;
        self.link(&config, debug)
    }

    pub fn link(&self, config: &SlinkConfig, debug: bool) -> Result<LinkReport> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| SlinkError::IoError(format!("Failed to create async runtime: {e}")))?;

        rt.block_on(self.link_async(config, debug))
    }

    /// Structural errors surface here before any filesystem work; individual
    /// symlink failures land in the report without aborting their siblings.
    pub async fn link_async(&self, config: &SlinkConfig, debug: bool) -> Result<LinkReport> {
        config.validate()?;
        let plans = plan::plan_all(config)?;

        if plans.is_empty() {
            slink_logger::finish("No modules to link");
            return Ok(LinkReport::default());
        }

        slink_logger::status(&format!("Linking {} modules...", plans.len()));

        let total = plans.len();
        let tracker = Arc::new(Mutex::new(CompletionTracker::new()));

        let link_tasks: Vec<_> = plans
            .iter()
            .map(|plan| {
                let fs = Arc::clone(&self.fs);
                let tracker = Arc::clone(&tracker);
                async move {
                    let outcome = link_one(fs.as_ref(), plan, debug);
                    let recorded = {
                        let mut tracker = tracker.lock().await;
                        tracker.record(&plan.link_name)
                    };
                    slink_logger::debug(&format!("{recorded}/{total} modules reported"), debug);
                    outcome
                }
            })
            .collect();

        let outcomes = join_all(link_tasks).await;

        let mut report = LinkReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(module) => report.linked.push(module),
                Err(failure) => report.failed.push(failure),
            }
        }

        if tracker.lock().await.is_complete(total) {
            if report.is_success() {
                slink_logger::finish(&format!(
                    "Linked {} modules ({} created)",
                    report.linked.len(),
                    report.created()
                ));
            } else {
                slink_logger::warn(&format!(
                    "Linked {} modules, {} failed",
                    report.linked.len(),
                    report.failed.len()
                ));
            }
        }

        Ok(report)
    }
}

impl Default for LinkManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates one module's symlink unless its target path is already occupied.
/// A pre-existing link is a no-op success.
fn link_one(
    fs: &dyn Filesystem,
    plan: &LinkPlan,
    debug: bool,
) -> std::result::Result<LinkedModule, LinkFailure> {
    if fs.exists(&plan.target_link_path) {
        slink_logger::info(&format!(
            "Symlink for module '{}' already exists. No op.",
            plan.module
        ));
        return Ok(LinkedModule::from_plan(plan, LinkOutcome::AlreadyExists));
    }

    slink_logger::debug(
        &format!(
            "{} -> {}",
            plan.source_path.display(),
            plan.target_link_path.display()
        ),
        debug,
    );

    match fs.create_symlink(&plan.source_path, &plan.target_link_path) {
        Ok(()) => {
            slink_logger::success(&format!("Symlink for module '{}' created.", plan.module));
            Ok(LinkedModule::from_plan(plan, LinkOutcome::Created))
        }
        Err(err) => {
            slink_logger::error(&format!(
                "Error creating symlink for module '{}': {err}",
                plan.module
            ));
            Err(LinkFailure {
                module: plan.module.clone(),
                link_name: plan.link_name.clone(),
                reason: err.to_string(),
            })
        }
    }
}
