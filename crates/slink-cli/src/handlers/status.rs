use anyhow::Result;
use owo_colors::OwoColorize;

use slink_core::status::LinkState;
use std::path::Path;

pub struct StatusHandler;

impl StatusHandler {
    pub fn status(dir: &str, config: Option<&Path>) -> Result<()> {
        Self::print_header();

        let report = slink_core::status_project(dir, config)?;

        if report.entries.is_empty() {
            slink_logger::info("No modules configured");
            return Ok(());
        }

        for entry in &report.entries {
            let state = match &entry.state {
                LinkState::Linked => "linked".bright_green().to_string(),
                LinkState::Missing => "missing".bright_yellow().to_string(),
                LinkState::Conflict(reason) => {
                    format!("{} ({reason})", "conflict".bright_red())
                }
            };
            println!(
                "  {} {} {}",
                entry.link_name.bright_white(),
                "→".bright_black(),
                state
            );
        }
        println!();

        slink_logger::info(&format!(
            "{} linked, {} missing, {} conflicts",
            report.linked(),
            report.missing(),
            report.conflicts()
        ));
        Ok(())
    }

    fn print_header() {
        println!(
            "{} {}",
            "slink".bright_cyan().bold(),
            "status".bright_white()
        );
        println!();
    }
}
