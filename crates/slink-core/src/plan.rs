use std::collections::HashSet;
use std::path::PathBuf;

use crate::resolve::{self, ResolvedModule};
use slink_config::SlinkConfig;
use slink_error::{Result, SlinkError};

/// A fully planned link operation: where the module lives and where its
/// symlink goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPlan {
    pub module: String,
    pub link_name: String,
    pub source_path: PathBuf,
    pub target_link_path: PathBuf,
}

/// Computes the source and target paths for one resolved module. Pure.
#[must_use]
pub fn plan(config: &SlinkConfig, resolved: &ResolvedModule) -> LinkPlan {
    let source_path = config.modules_base_path.join(&resolved.module);
    let target_link_path = config
        .node_modules_path
        .join(format!("{}{}", config.symlink_prefix, resolved.link_name));

    LinkPlan {
        module: resolved.module.clone(),
        link_name: resolved.link_name.clone(),
        source_path,
        target_link_path,
    }
}

/// Resolves and plans every configured module. Two entries landing on the
/// same link name would race against one target path, so that fails the
/// whole invocation up front.
pub fn plan_all(config: &SlinkConfig) -> Result<Vec<LinkPlan>> {
    let mut seen = HashSet::new();
    let mut plans = Vec::with_capacity(config.modules.len());

    for entry in &config.modules {
        let resolved = resolve::resolve(entry)?;
        if !seen.insert(resolved.link_name.clone()) {
            return Err(SlinkError::DuplicateLinkName(resolved.link_name));
        }
        plans.push(plan(config, &resolved));
    }

    Ok(plans)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use slink_config::ModuleEntry;

    fn test_config() -> SlinkConfig {
        let mut config = SlinkConfig::new("/srv/modules");
        config.node_modules_path = PathBuf::from("/srv/app/node_modules");
        config
    }

    #[test]
    fn test_plan_joins_base_and_prefix() {
        let config = test_config();
        let resolved = ResolvedModule {
            module: "module_one".to_string(),
            link_name: "module_one".to_string(),
        };

        let plan = plan(&config, &resolved);
        assert_eq!(plan.source_path, PathBuf::from("/srv/modules/module_one"));
        assert_eq!(
            plan.target_link_path,
            PathBuf::from("/srv/app/node_modules/@module_one")
        );
    }

    #[test]
    fn test_plan_nested_module_links_by_deepest_segment() {
        let config = test_config();
        let resolved = ResolvedModule {
            module: "module_four/a/nested".to_string(),
            link_name: "nested".to_string(),
        };

        let plan = plan(&config, &resolved);
        assert_eq!(
            plan.source_path,
            PathBuf::from("/srv/modules/module_four/a/nested")
        );
        assert_eq!(
            plan.target_link_path,
            PathBuf::from("/srv/app/node_modules/@nested")
        );
    }

    #[test]
    fn test_plan_respects_custom_prefix() {
        let mut config = test_config();
        config.symlink_prefix = "local-".to_string();
        let resolved = ResolvedModule {
            module: "module_one".to_string(),
            link_name: "module_one".to_string(),
        };

        let plan = plan(&config, &resolved);
        assert_eq!(
            plan.target_link_path,
            PathBuf::from("/srv/app/node_modules/local-module_one")
        );
    }

    #[test]
    fn test_plan_all_preserves_module_order() {
        let mut config = test_config();
        config.modules = vec![
            ModuleEntry::from("module_one"),
            ModuleEntry::from("module_three"),
        ];

        let plans = plan_all(&config).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].link_name, "module_one");
        assert_eq!(plans[1].link_name, "module_three");
    }

    #[test]
    fn test_plan_all_rejects_duplicate_link_names() {
        let mut config = test_config();
        config.modules = vec![
            ModuleEntry::from("group_a/shared"),
            ModuleEntry::from("group_b/shared"),
        ];

        let err = plan_all(&config).unwrap_err();
        assert!(matches!(err, SlinkError::DuplicateLinkName(name) if name == "shared"));
    }

    #[test]
    fn test_plan_all_rejects_alias_colliding_with_derived_name() {
        let mut config = test_config();
        config.modules = vec![
            ModuleEntry::from("module_one"),
            ModuleEntry::aliased("module_two", "module_one"),
        ];

        assert!(matches!(
            plan_all(&config),
            Err(SlinkError::DuplicateLinkName(_))
        ));
    }

    #[test]
    fn test_plan_all_of_empty_config_is_empty() {
        let config = test_config();
        assert!(plan_all(&config).unwrap().is_empty());
    }
}
