use std::fmt;

#[derive(Debug)]
pub enum SlinkError {
    ConfigMissing(String),
    ConfigInvalid(String),
    ConfigExists(String),
    InvalidModuleSpec(String),
    DuplicateLinkName(String),
    SymlinkFailed(String, String),
    IoError(String),
}

impl fmt::Display for SlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigMissing(path) => {
                write!(f, "No slink configuration found at {path}")
            }
            Self::ConfigInvalid(msg) => {
                write!(f, "Invalid slink configuration: {msg}")
            }
            Self::ConfigExists(path) => {
                write!(f, "Configuration already exists at {path}")
            }
            Self::InvalidModuleSpec(msg) => {
                write!(f, "Invalid module specification: {msg}")
            }
            Self::DuplicateLinkName(name) => {
                write!(f, "Duplicate link name '{name}'")
            }
            Self::SymlinkFailed(module, reason) => {
                write!(f, "Failed to create symlink for module '{module}': {reason}")
            }
            Self::IoError(msg) => {
                write!(f, "IO error: {msg}")
            }
        }
    }
}

impl std::error::Error for SlinkError {}

impl From<anyhow::Error> for SlinkError {
    fn from(err: anyhow::Error) -> Self {
        Self::ConfigInvalid(err.to_string())
    }
}

impl From<std::io::Error> for SlinkError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SlinkError>;
