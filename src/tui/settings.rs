//! Centralized, hardcoded UI settings for the prompt surface.
//!
//! This is the single place to tweak banner text, the prompt marker, reply
//! messages, and colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const SEPARATOR_CHAR: char = '=';
pub const SEPARATOR_WIDTH: usize = 120;

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_PRIMARY: &str = "> ";
pub const PROMPT_SYMBOL: &str = ">";
pub const PROMPT_SPACER: &str = " ";

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_DESCRIBE_TASK: &str = "Please describe the next task you'd like me to work on.";
pub const MSG_EXIT_HINT: &str = "You can also type 'exit' or 'quit' to end the session.";
pub const MSG_GOODBYE: &str = "Session ended. Goodbye!";
pub const MSG_INTERRUPTED: &str = "Session ended by user.";
pub const MSG_TASK_LABEL: &str = "Received next task:";
pub const MSG_TASK_ACK: &str = "Thank you, I will get to work on that now.";

pub const LABEL_ERROR: &str = "error:";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_SEPARATOR: Color = Color::DarkGrey;
pub const COLOR_PROMPT_SYMBOL: Color = Color::White;
pub const COLOR_TASK_ECHO: Color = Color::Cyan;
pub const COLOR_ERROR: Color = Color::Red;
