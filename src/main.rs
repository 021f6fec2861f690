//! CLI entry point for next-task.

use next_task::session::{run_once, SessionOutcome};
use next_task::tui::Renderer;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr and stay silent unless RUST_LOG opts in, so
    // the user-facing stdout stream keeps its fixed format.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let renderer = Renderer::new(std::io::stdout().is_terminal());

    match run_once(&renderer) {
        Ok(SessionOutcome::Continue) => {}
        Ok(SessionOutcome::Exit(code)) => std::process::exit(code),
        Err(err) => {
            renderer.error(&format!("failed to read input: {err}"));
            std::process::exit(1);
        }
    }
}
