//! One prompt/reply cycle against the terminal.
//!
//! `run_once` performs exactly one banner/read/reply cycle and reports how
//! the caller should proceed; it never loops and never exits the process
//! itself. The binary shell owns the actual `process::exit`, which keeps
//! the cycle testable in-process.

use crate::prompt::{classify, Reply};
use crate::tui::input::{read_task_line, ReadOutcome};
use crate::tui::renderer::Renderer;
use std::io;
use tracing::debug;

/// How the caller should proceed after one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A task was acknowledged; the caller may prompt again.
    Continue,
    /// The session is over; exit the process with this code.
    Exit(i32),
}

/// Run one banner/read/reply cycle.
///
/// Both voluntary exits (keyword, EOF) and the Ctrl-C interrupt resolve to
/// `Exit(0)`; an acknowledged task resolves to `Continue`.
pub fn run_once(renderer: &Renderer) -> io::Result<SessionOutcome> {
    renderer.banner();
    let outcome = read_task_line(renderer.color())?;
    Ok(reply_to(renderer, outcome))
}

/// Map one read outcome to rendered output and a session outcome.
fn reply_to(renderer: &Renderer, outcome: ReadOutcome) -> SessionOutcome {
    match outcome {
        ReadOutcome::Interrupted => {
            debug!("input interrupted by user");
            renderer.interrupted();
            SessionOutcome::Exit(0)
        }
        ReadOutcome::Eof => {
            // EOF counts as a voluntary session end, same as an exit keyword.
            debug!("stdin reached end of stream");
            renderer.goodbye();
            SessionOutcome::Exit(0)
        }
        ReadOutcome::Line(line) => match classify(&line) {
            Reply::EndSession => {
                debug!("exit keyword received");
                renderer.goodbye();
                SessionOutcome::Exit(0)
            }
            Reply::Acknowledge(task) => {
                debug!(chars = task.raw().chars().count(), "task accepted");
                renderer.acknowledgment(task.raw());
                SessionOutcome::Continue
            }
        },
    }
}
