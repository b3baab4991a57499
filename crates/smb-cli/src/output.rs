//! Output formatting utilities

use colored::Colorize;

/// Print a success line
pub(crate) fn success(msg: &str) {
    println!("{} {msg}", "ok".green().bold());
}
