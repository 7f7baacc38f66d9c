use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = slink_constants::BIN_NAME)]
#[command(version = slink_constants::VERSION)]
#[command(propagate_version = true)]
#[command(about = slink_constants::DESCRIPTION, long_about = None)]
pub struct Cli {
    /// Only print errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Creates the symlinks described by slink.json
    #[command(alias = "l")]
    Link {
        /// Project directory containing slink.json
        #[arg(default_value = ".")]
        dir: String,
        /// Path to an alternate configuration file
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
        /// Enable debug mode for verbose output
        #[arg(long)]
        debug: bool,
    },
    /// Shows which configured symlinks currently exist
    #[command(alias = "st")]
    Status {
        /// Project directory containing slink.json
        #[arg(default_value = ".")]
        dir: String,
        /// Path to an alternate configuration file
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
    },
    /// Removes the symlinks described by slink.json
    #[command(aliases = ["rm", "remove"])]
    Unlink {
        /// Project directory containing slink.json
        #[arg(default_value = ".")]
        dir: String,
        /// Path to an alternate configuration file
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
        /// Enable debug mode for verbose output
        #[arg(long)]
        debug: bool,
    },
    /// Initializes a new slink.json file
    #[command(alias = "new")]
    Init {
        /// Project directory to initialize
        #[arg(default_value = ".")]
        dir: String,
        /// Base directory the module sources live under
        #[arg(short = 'b', long = "base")]
        base: Option<PathBuf>,
        /// Overwrites an existing slink.json
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}
