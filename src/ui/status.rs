//! One-line status indicator for in-flight operations.

use std::io::Write;

use colored::Colorize;

/// Prints a dimmed in-flight label, then replaces it with a success or
/// failure line once the operation resolves. Writes to stderr so listings
/// on stdout stay clean.
pub struct StatusLine;

impl StatusLine {
    pub fn start(label: &str) -> Self {
        eprint!("{} {}", "…".cyan(), label.dimmed());
        let _ = std::io::stderr().flush();
        StatusLine
    }

    pub fn succeed(self, message: &str) {
        Self::clear();
        eprintln!("{} {}", "✔".green(), message);
    }

    pub fn fail(self, message: &str) {
        Self::clear();
        eprintln!("{} {}", "✘".red(), message.red());
    }

    fn clear() {
        // \r returns to column 0, ESC[2K wipes the in-flight label.
        eprint!("\r\x1b[2K");
    }
}
