use anyhow::Result;
use owo_colors::OwoColorize;

use std::path::Path;

pub struct UnlinkHandler;

impl UnlinkHandler {
    pub fn unlink(dir: &str, config: Option<&Path>, debug: bool) -> Result<()> {
        Self::print_header();

        let report = slink_core::unlink_project(dir, config, debug)?;
        if !report.skipped.is_empty() {
            slink_logger::warn(&format!(
                "{} target paths were not symlinks and were left alone",
                report.skipped.len()
            ));
        }
        Ok(())
    }

    fn print_header() {
        println!(
            "{} {}",
            "slink".bright_cyan().bold(),
            "unlink".bright_white()
        );
        println!();
    }
}
