//! Output formatting for the CLI.

use console::style;

/// Output handler for CLI messages.
#[derive(Clone, Copy, Default)]
pub struct Output;

impl Output {
    /// Create a new output handler.
    pub fn new() -> Self {
        Self
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        println!("\n{}\n", style(msg).bold().cyan());
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✔").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }
}
