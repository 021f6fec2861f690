//! Terminal output writer for the prompt surface.
//!
//! With color disabled the renderer writes the pure text from
//! [`crate::prompt`] byte for byte, which keeps piped output stable for
//! scripts and tests. With color enabled the same characters are written
//! with light styling on the chrome.

use crate::prompt;
use crate::tui::settings;
use crossterm::style::Stylize;

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Whether color output is enabled.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Print the banner block that precedes the prompt marker.
    pub fn banner(&self) {
        if self.color {
            let separator = prompt::separator_line();
            println!();
            println!("{}", separator.as_str().with(settings::COLOR_SEPARATOR));
            println!("{}", settings::MSG_DESCRIBE_TASK);
            println!("{}", settings::MSG_EXIT_HINT);
            println!("{}", separator.with(settings::COLOR_SEPARATOR));
        } else {
            print!("{}", prompt::banner_text());
        }
    }

    /// Print the acknowledgment block for an accepted task.
    pub fn acknowledgment(&self, task: &str) {
        if self.color {
            println!();
            println!("{}", settings::MSG_TASK_LABEL);
            println!(
                "{}{}",
                settings::INDENT_1,
                format!("\"{task}\"").with(settings::COLOR_TASK_ECHO)
            );
            println!();
            println!("{}", settings::MSG_TASK_ACK);
        } else {
            print!("{}", prompt::acknowledgment_text(task));
        }
    }

    /// Print the goodbye notice for an exit keyword or EOF.
    pub fn goodbye(&self) {
        println!("{}", settings::MSG_GOODBYE);
    }

    /// Print the closing notice for a Ctrl-C interrupted read.
    ///
    /// The leading newline moves past the prompt row the cursor is still on.
    pub fn interrupted(&self) {
        println!("\n{}", settings::MSG_INTERRUPTED);
    }

    /// Print an error line (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }
}
