use std::io::IsTerminal;

use colored::Colorize;

use crate::constants::ui::RULE_WIDTH;

/// Terminal styling passed to everything that prints.
///
/// All methods return the styled text; with `colored == false` the text is
/// returned with its marker symbol only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub colored: bool,
}

impl Theme {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Uncolored theme, used when output is not a terminal.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Colored when stdout is a terminal and `no_color` is not set.
    pub fn detect(no_color: bool) -> Self {
        Self::new(!no_color && std::io::stdout().is_terminal())
    }

    /// Green `✓` line.
    pub fn success(&self, msg: &str) -> String {
        if self.colored {
            format!("{} {}", "✓".green().bold(), msg.green())
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Red `✗` line.
    pub fn error(&self, msg: &str) -> String {
        if self.colored {
            format!("{} {}", "✗".red().bold(), msg.red())
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Yellow `⚠` line.
    pub fn warning(&self, msg: &str) -> String {
        if self.colored {
            format!("{} {}", "⚠".yellow().bold(), msg.yellow())
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Blue `ℹ` line.
    pub fn info(&self, msg: &str) -> String {
        if self.colored {
            format!("{} {}", "ℹ".blue().bold(), msg.blue())
        } else {
            format!("ℹ {}", msg)
        }
    }

    pub fn header(&self, msg: &str) -> String {
        if self.colored {
            msg.bold().to_string()
        } else {
            msg.to_string()
        }
    }

    /// Menu keys and prompts.
    pub fn accent(&self, msg: &str) -> String {
        if self.colored {
            msg.cyan().to_string()
        } else {
            msg.to_string()
        }
    }

    pub fn muted(&self, msg: &str) -> String {
        if self.colored {
            msg.bright_black().to_string()
        } else {
            msg.to_string()
        }
    }

    /// `=` rule framing a commit message.
    pub fn rule(&self) -> String {
        self.muted(&"=".repeat(RULE_WIDTH))
    }
}
