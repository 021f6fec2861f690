//! Terminal user-interface building blocks.
//!
//! This module hosts the line reader and the terminal renderer. The split
//! keeps blocking input mechanics and output styling decoupled from the
//! session logic that consumes them.

pub mod input;
pub mod renderer;
pub mod settings;

pub use input::{read_task_line, ReadOutcome};
pub use renderer::Renderer;
