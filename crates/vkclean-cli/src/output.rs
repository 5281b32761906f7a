//! Output formatting helpers and the terminal console.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use vkclean::Console;
use vkclean::console::group_line;
use vkclean_core::GroupRecord;

/// Print the startup banner.
pub fn banner() {
    println!("{}", "VK Cleaner - Delete all groups and communities".bold());
    println!("{}", "=".repeat(50));
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Explain how to configure credentials.
pub fn missing_credentials() {
    error("ERROR: No authentication credentials found!");
    println!("Please set one of the following environment variables:");
    println!("- VK_ACCESS_TOKEN (recommended)");
    println!("- VK_LOGIN and VK_PASSWORD");
    println!();
    println!("Example:");
    println!("{}", "export VK_ACCESS_TOKEN='your_access_token_here'".dimmed());
}

/// Remind how to turn the simulation off.
pub fn live_mode_hint() {
    println!(
        "{}",
        "To perform actual deletion, set VK_DRY_RUN=false or pass --dry-run false".dimmed()
    );
}

/// Console backed by stdout and stdin.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn show_groups(&mut self, groups: &[GroupRecord]) {
        println!();
        println!("Groups that will be left:");
        for group in groups {
            println!("{}", group_line(group));
        }
    }

    fn show_mode(&mut self, dry_run: bool, count: usize) {
        println!();
        if dry_run {
            println!(
                "{}",
                "[DRY RUN MODE] This is a simulation - no groups will actually be left.".cyan()
            );
        } else {
            let notice = format!("[LIVE MODE] This will actually leave {} groups!", count);
            println!("{}", notice.red().bold());
        }
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        print!("\n{}", question);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer)
    }
}
