pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str =
    "Symlink local modules into node_modules to simulate installed dependencies";
pub const BIN_NAME: &str = "slink";

pub const CONFIG_FILE: &str = "slink.json";

pub const DEFAULT_SYMLINK_PREFIX: &str = "@";
pub const DEFAULT_NODE_MODULES_DIR: &str = "./node_modules";
pub const DEFAULT_MODULES_DIR: &str = "./modules";
