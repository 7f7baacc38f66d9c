use std::path::PathBuf;

use crate::plan::LinkPlan;
use slink_error::SlinkError;

/// How a module's symlink came to be in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedModule {
    pub module: String,
    pub link_name: String,
    pub target_link_path: PathBuf,
    pub outcome: LinkOutcome,
}

impl LinkedModule {
    #[must_use]
    pub fn from_plan(plan: &LinkPlan, outcome: LinkOutcome) -> Self {
        Self {
            module: plan.module.clone(),
            link_name: plan.link_name.clone(),
            target_link_path: plan.target_link_path.clone(),
            outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFailure {
    pub module: String,
    pub link_name: String,
    pub reason: String,
}

/// Aggregate result of one `link` invocation. Produced exactly once, after
/// every module has reported.
#[derive(Debug, Default)]
pub struct LinkReport {
    pub linked: Vec<LinkedModule>,
    pub failed: Vec<LinkFailure>,
}

impl LinkReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.linked.len() + self.failed.len()
    }

    #[must_use]
    pub fn created(&self) -> usize {
        self.linked
            .iter()
            .filter(|m| m.outcome == LinkOutcome::Created)
            .count()
    }

    /// Converts the report into an error carrying the first failure, for
    /// callers that treat any failed module as fatal.
    pub fn into_result(self) -> Result<Self, SlinkError> {
        if let Some(failure) = self.failed.first() {
            return Err(SlinkError::SymlinkFailed(
                failure.module.clone(),
                failure.reason.clone(),
            ));
        }
        Ok(self)
    }
}
