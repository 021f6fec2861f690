//! next-task — an interactive prompt that collects the next task to work on.
//!
//! This crate runs a single prompt/reply cycle: it shows a banner, reads one
//! line from the terminal, and either acknowledges the line as a task
//! description or ends the session on an exit keyword, Ctrl-C, or EOF.
//! Classification and reply text live in [`prompt`] as pure functions so
//! every output byte can be tested without a TTY; [`session`] wires them to
//! the terminal; [`tui`] owns input and rendering mechanics.
//!
//! # Quick start
//!
//! ```no_run
//! use next_task::session::{run_once, SessionOutcome};
//! use next_task::tui::Renderer;
//!
//! let renderer = Renderer::new(false);
//! match run_once(&renderer) {
//!     Ok(SessionOutcome::Continue) => {}
//!     Ok(SessionOutcome::Exit(code)) => std::process::exit(code),
//!     Err(err) => eprintln!("error: {err}"),
//! }
//! ```

pub mod prompt;
pub mod session;
pub mod tui;
