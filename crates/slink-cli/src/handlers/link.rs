use anyhow::Result;
use owo_colors::OwoColorize;

use std::path::Path;

pub struct LinkHandler;

impl LinkHandler {
    pub fn link(dir: &str, config: Option<&Path>, debug: bool) -> Result<()> {
        Self::print_header();

        let report = slink_core::link_project(dir, config, debug)?;
        report.into_result()?;
        Ok(())
    }

    fn print_header() {
        println!("{} {}", "slink".bright_cyan().bold(), "link".bright_white());
        println!();
    }
}
