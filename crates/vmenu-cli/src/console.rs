//! CLI console utilities

use colored::*;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Echo the command line about to be executed
    pub fn command(&self, rendered: &str) {
        println!("{} {}", "Executing:".bold(), rendered.dimmed());
    }
}
