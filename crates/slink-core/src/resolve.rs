use slink_config::ModuleEntry;
use slink_error::{Result, SlinkError};

/// A module entry normalized to its source path and the name its symlink
/// will carry, before prefixing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModule {
    pub module: String,
    pub link_name: String,
}

/// Normalizes a module entry. The link name is the explicit alias when one
/// is given, otherwise the last path segment of the module path.
pub fn resolve(entry: &ModuleEntry) -> Result<ResolvedModule> {
    let (module, alias) = match entry {
        ModuleEntry::Plain(path) => (path.as_str(), None),
        ModuleEntry::Detailed { module, alias } => (module.as_str(), alias.as_deref()),
    };

    if module.is_empty() {
        return Err(SlinkError::InvalidModuleSpec(
            "module path must not be empty".to_string(),
        ));
    }

    let link_name = match alias {
        Some("") => {
            return Err(SlinkError::InvalidModuleSpec(format!(
                "empty alias for module '{module}'"
            )));
        }
        Some(alias) => alias.to_string(),
        None => derive_link_name(module)?,
    };

    Ok(ResolvedModule {
        module: module.to_string(),
        link_name,
    })
}

fn derive_link_name(module: &str) -> Result<String> {
    let segment = module
        .rsplit(std::path::MAIN_SEPARATOR)
        .next()
        .unwrap_or(module);

    if segment.is_empty() {
        return Err(SlinkError::InvalidModuleSpec(format!(
            "module path '{module}' has no trailing segment"
        )));
    }

    Ok(segment.to_string())
}
