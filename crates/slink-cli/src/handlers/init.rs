use anyhow::Result;
use owo_colors::OwoColorize;

use std::path::Path;

pub struct InitHandler;

impl InitHandler {
    pub fn init(dir: &str, base: Option<&Path>, force: bool) -> Result<()> {
        Self::print_header();
        slink_core::init_config(dir, base, force)?;
        Ok(())
    }

    fn print_header() {
        println!("{} {}", "slink".bright_cyan().bold(), "init".bright_white());
        println!();
    }
}
