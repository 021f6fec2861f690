//! Pure input classification and reply-text assembly.
//!
//! Everything here is free of terminal and process concerns: classification
//! maps a captured line to a [`Reply`], and the text builders produce the
//! exact bytes the renderer writes. Keeping this half pure lets the reply
//! surface be unit-tested without a TTY or a spawned process.

use crate::tui::settings;

/// Keywords that end the session, compared after trimming and case-folding.
const EXIT_KEYWORDS: [&str; 2] = ["exit", "quit"];

/// One line captured from the user.
///
/// `raw` is the text as entered with only the line terminator removed;
/// surrounding spaces are preserved for display. The normalized form exists
/// solely for exit-keyword comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    raw: String,
}

impl TaskInput {
    /// Wrap a captured line (line terminator already stripped).
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The text as entered.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed, lowercased form used only for keyword comparison.
    pub fn normalized(&self) -> String {
        self.raw.trim().to_lowercase()
    }

    /// Whether this line is a recognized exit keyword.
    pub fn is_exit_keyword(&self) -> bool {
        let normalized = self.normalized();
        EXIT_KEYWORDS.iter().any(|keyword| normalized == *keyword)
    }
}

/// Reply chosen for one captured line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The line matched an exit keyword; the session should end.
    EndSession,
    /// The line is a task description to echo back.
    Acknowledge(TaskInput),
}

/// Classify one captured line as an exit keyword or a task description.
///
/// Any line that is not an exit keyword is a valid task: empty lines,
/// unusual characters, and arbitrarily long text are all accepted.
pub fn classify(line: &str) -> Reply {
    let input = TaskInput::new(line);
    if input.is_exit_keyword() {
        Reply::EndSession
    } else {
        Reply::Acknowledge(input)
    }
}

/// The full-width `=` separator row.
pub fn separator_line() -> String {
    settings::SEPARATOR_CHAR
        .to_string()
        .repeat(settings::SEPARATOR_WIDTH)
}

/// Banner block shown before the prompt marker.
pub fn banner_text() -> String {
    let separator = separator_line();
    format!(
        "\n{separator}\n{}\n{}\n{separator}\n",
        settings::MSG_DESCRIBE_TASK,
        settings::MSG_EXIT_HINT,
    )
}

/// Acknowledgment block echoing an accepted task back in quotes.
pub fn acknowledgment_text(task: &str) -> String {
    format!(
        "\n{}\n{}\"{task}\"\n\n{}\n",
        settings::MSG_TASK_LABEL,
        settings::INDENT_1,
        settings::MSG_TASK_ACK,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_end_session_in_any_case_and_padding() {
        for line in ["exit", "EXIT", "  quit  ", "Quit", "\texit\t", "qUiT"] {
            assert_eq!(classify(line), Reply::EndSession, "line: {line:?}");
        }
    }

    #[test]
    fn ordinary_text_is_acknowledged_verbatim() {
        match classify("fix the login bug") {
            Reply::Acknowledge(task) => assert_eq!(task.raw(), "fix the login bug"),
            Reply::EndSession => panic!("task text classified as exit"),
        }
    }

    #[test]
    fn empty_line_is_a_task_not_an_exit() {
        match classify("") {
            Reply::Acknowledge(task) => assert_eq!(task.raw(), ""),
            Reply::EndSession => panic!("empty line classified as exit"),
        }
    }

    #[test]
    fn keyword_embedded_in_text_does_not_end_session() {
        assert!(matches!(classify("exit the building"), Reply::Acknowledge(_)));
        assert!(matches!(classify("please quit smoking"), Reply::Acknowledge(_)));
    }

    #[test]
    fn display_text_keeps_surrounding_spaces() {
        // Normalization is for comparison only; the echo shows the raw text.
        match classify("  deploy to staging  ") {
            Reply::Acknowledge(task) => assert_eq!(task.raw(), "  deploy to staging  "),
            Reply::EndSession => panic!("padded task classified as exit"),
        }
    }

    #[test]
    fn classification_is_stateless_across_calls() {
        let first = classify("write the release notes");
        let second = classify("triage the crash reports");
        assert!(matches!(first, Reply::Acknowledge(_)));
        assert!(matches!(second, Reply::Acknowledge(_)));
        assert_eq!(classify("quit"), Reply::EndSession);
        assert!(matches!(classify("one more"), Reply::Acknowledge(_)));
    }

    #[test]
    fn banner_text_matches_reference_layout() {
        let separator = "=".repeat(120);
        let expected = format!(
            "\n{separator}\nPlease describe the next task you'd like me to work on.\nYou can also type 'exit' or 'quit' to end the session.\n{separator}\n"
        );
        assert_eq!(banner_text(), expected);
    }

    #[test]
    fn acknowledgment_text_quotes_and_indents_the_task() {
        let text = acknowledgment_text("fix the login bug");
        assert_eq!(
            text,
            "\nReceived next task:\n  \"fix the login bug\"\n\nThank you, I will get to work on that now.\n"
        );
    }

    #[test]
    fn acknowledgment_text_handles_empty_task() {
        assert!(acknowledgment_text("").contains("  \"\""));
    }

    #[cfg(feature = "fuzz-tests")]
    mod fuzz_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn non_keyword_lines_are_always_acknowledged(line in "[a-z0-9 ]{1,60}") {
                prop_assume!(!matches!(line.trim(), "exit" | "quit"));
                match classify(&line) {
                    Reply::Acknowledge(task) => prop_assert_eq!(task.raw(), line.as_str()),
                    Reply::EndSession => prop_assert!(false, "non-keyword line ended session"),
                }
            }

            #[test]
            fn acknowledgment_always_embeds_the_quoted_task(line in "[ -~]{0,60}") {
                prop_assume!(!line.contains('"'));
                let text = acknowledgment_text(&line);
                let quoted = format!("  \"{line}\"");
                prop_assert!(text.contains(&quoted));
            }
        }
    }
}
