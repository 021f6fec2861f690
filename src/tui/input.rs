//! Blocking line input with explicit interrupt reporting.
//!
//! `read_task_line` returns a tagged [`ReadOutcome`] instead of unwinding on
//! Ctrl-C: in raw mode the interrupt arrives as a key event the caller can
//! match on. A cooked fallback covers piped/non-TTY stdin.

use crate::tui::settings;
use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, BufRead, IsTerminal, Write};

/// Result of reading one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// User submitted a full line (line terminator stripped).
    Line(String),
    /// End-of-file (`Ctrl-D` on an empty buffer / stdin EOF).
    Eof,
    /// User pressed Ctrl-C while the read was blocked.
    Interrupted,
}

/// Print the prompt marker and block until the user submits a line,
/// reaches EOF, or interrupts the read.
pub fn read_task_line(color: bool) -> io::Result<ReadOutcome> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return read_line_fallback(color);
    }
    read_line_interactive(color)
}

fn read_line_fallback(color: bool) -> io::Result<ReadOutcome> {
    let mut stdout = io::stdout();
    write_prompt_marker(&mut stdout, color)?;
    stdout.flush()?;

    let outcome = read_line_from(&mut io::stdin().lock())?;
    if outcome == ReadOutcome::Eof {
        // Move past the prompt line so the closing notice starts cleanly.
        println!();
    }
    Ok(outcome)
}

/// Read one line from any buffered reader, stripping the terminator.
fn read_line_from(reader: &mut impl BufRead) -> io::Result<ReadOutcome> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(ReadOutcome::Eof);
    }
    Ok(ReadOutcome::Line(
        line.trim_end_matches(['\n', '\r']).to_string(),
    ))
}

fn read_line_interactive(color: bool) -> io::Result<ReadOutcome> {
    let mut stdout = io::stdout();
    write_prompt_marker(&mut stdout, color)?;
    stdout.flush()?;

    let _guard = RawModeGuard::acquire()?;
    let mut buffer = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }

        match key.code {
            KeyCode::Enter => {
                stdout.queue(Print("\r\n"))?;
                stdout.flush()?;
                return Ok(ReadOutcome::Line(buffer));
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // Raw mode surfaces Ctrl-C as a key event, not SIGINT.
                return Ok(ReadOutcome::Interrupted);
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // Ctrl-D ends the session only when no text is present.
                if buffer.is_empty() {
                    stdout.queue(Print("\r\n"))?;
                    stdout.flush()?;
                    return Ok(ReadOutcome::Eof);
                }
            }
            KeyCode::Backspace => {
                if buffer.pop().is_some() {
                    redraw_line(&mut stdout, color, &buffer)?;
                }
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(ch);
                stdout.queue(Print(ch))?;
                stdout.flush()?;
            }
            _ => {}
        }
    }
}

/// Repaint the prompt row after an edit.
fn redraw_line(stdout: &mut io::Stdout, color: bool, buffer: &str) -> io::Result<()> {
    stdout.queue(MoveToColumn(0))?;
    stdout.queue(Clear(ClearType::CurrentLine))?;
    write_prompt_marker(stdout, color)?;
    stdout.queue(Print(buffer))?;
    stdout.flush()
}

fn write_prompt_marker(stdout: &mut io::Stdout, color: bool) -> io::Result<()> {
    if color {
        stdout.queue(PrintStyledContent(
            settings::PROMPT_SYMBOL
                .with(settings::COLOR_PROMPT_SYMBOL)
                .bold(),
        ))?;
        stdout.queue(Print(settings::PROMPT_SPACER))?;
    } else {
        stdout.queue(Print(settings::PROMPT_PRIMARY))?;
    }
    Ok(())
}

struct RawModeGuard;

impl RawModeGuard {
    /// Enable terminal raw mode and return a guard that disables it on drop.
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
