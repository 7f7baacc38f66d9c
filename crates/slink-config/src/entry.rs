use serde::{Deserialize, Serialize};

/// A module to link: either a bare path, or a path with an explicit alias
/// overriding the derived link name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleEntry {
    Plain(String),
    Detailed {
        module: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
    },
}

impl ModuleEntry {
    pub fn aliased(module: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Detailed {
            module: module.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<&str> for ModuleEntry {
    fn from(module: &str) -> Self {
        Self::Plain(module.to_string())
    }
}
