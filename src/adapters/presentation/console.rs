//! Line-oriented terminal presenter and command parser.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::intake::{PresentationEvent, Role, SubmitState};
use crate::ports::Presenter;

/// Renders presentation events as plain text on stdout.
///
/// Tracks whether a submission is in flight so that locked edits are only
/// explained when the lock outlives the submission.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    submitting: AtomicBool,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for one event, or `None` for events with no visible output.
    pub fn render(&self, event: &PresentationEvent) -> Option<String> {
        if let PresentationEvent::SetSubmitState { state } = event {
            self.submitting
                .store(*state == SubmitState::Pending, Ordering::Relaxed);
        }

        match event {
            PresentationEvent::ShowMessage { text, role } => Some(match role {
                Role::Bot => format!("[bot] {}", text),
                Role::User => format!("[you] {}", text),
            }),
            PresentationEvent::ShowAcknowledgement { step } => Some(format!(
                "{}\n  [{}] press Enter to continue",
                step.message, step.button_label
            )),
            PresentationEvent::ShowQuestion { index, total, text } => {
                Some(format!("{}\n{}", label(*index, *total), text))
            }
            PresentationEvent::ShowEditor {
                index,
                total,
                question,
                prefill,
            } => Some(format!(
                "Editing {}\n{}\nCurrent answer: {}\nType the new answer:",
                label(*index, *total).to_lowercase(),
                question,
                prefill
            )),
            PresentationEvent::ShowReviewList { heading, items, .. } => {
                let mut out = heading.clone();
                for item in items {
                    out.push_str(&format!(
                        "\n\n{}: {}\n  > {}",
                        label(item.index, item.total),
                        item.question,
                        item.answer
                    ));
                }
                out.push_str("\n\nType /edit N to change an answer, or /submit to send them all.");
                Some(out)
            }
            PresentationEvent::RetractLastExchange { index, total } => Some(format!(
                "(answer removed; {} is open again)",
                label(*index, *total).to_lowercase()
            )),
            // Nothing is removed from a terminal; only note controls that stay.
            PresentationEvent::RetireAcknowledgement { removed: false, .. } => {
                Some("(confirmed)".to_string())
            }
            PresentationEvent::SetBackEnabled { enabled: true } => {
                Some("(type /back to return to the previous question)".to_string())
            }
            PresentationEvent::SetEditsEnabled { enabled: false }
                if !self.submitting.load(Ordering::Relaxed) =>
            {
                Some("(edits locked; type /unlock to re-enable them)".to_string())
            }
            PresentationEvent::SetSubmitState {
                state: SubmitState::Pending,
            } => Some("Submitting...".to_string()),
            PresentationEvent::SetSubmitState {
                state: SubmitState::Error,
            } => Some("(type /submit to try again)".to_string()),
            _ => None,
        }
    }
}

impl Presenter for ConsolePresenter {
    fn present(&self, event: PresentationEvent) {
        if let Some(text) = self.render(&event) {
            let mut stdout = std::io::stdout().lock();
            // A closed stdout leaves nothing to report to.
            let _ = writeln!(stdout, "{}\n", text);
            let _ = stdout.flush();
        }
    }
}

fn label(index: usize, total: usize) -> String {
    format!("Question {} of {}", index + 1, total)
}

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Empty line or `/ack`: confirm the pending acknowledgement.
    Acknowledge,
    /// `/back`
    Back,
    /// `/edit N`, with N counted from 1.
    Edit(usize),
    /// `/unlock`: re-enable edits after a failed submission.
    Unlock,
    /// `/submit`
    Submit,
    /// `/quit`
    Quit,
    /// Anything not starting with `/`.
    Text(String),
    /// A `/` command that could not be understood.
    Unknown(String),
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ConsoleCommand::Acknowledge;
        }
        let Some(command) = trimmed.strip_prefix('/') else {
            return ConsoleCommand::Text(trimmed.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("ack"), None, _) => ConsoleCommand::Acknowledge,
            (Some("back"), None, _) => ConsoleCommand::Back,
            (Some("unlock"), None, _) => ConsoleCommand::Unlock,
            (Some("submit"), None, _) => ConsoleCommand::Submit,
            (Some("quit"), None, _) => ConsoleCommand::Quit,
            (Some("edit"), Some(n), None) => match n.parse::<usize>() {
                Ok(n) if n > 0 => ConsoleCommand::Edit(n - 1),
                _ => ConsoleCommand::Unknown(trimmed.to_string()),
            },
            _ => ConsoleCommand::Unknown(trimmed.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse {
        use super::*;

        #[test]
        fn empty_line_acknowledges() {
            assert_eq!(ConsoleCommand::parse(""), ConsoleCommand::Acknowledge);
            assert_eq!(ConsoleCommand::parse("   "), ConsoleCommand::Acknowledge);
            assert_eq!(ConsoleCommand::parse("/ack"), ConsoleCommand::Acknowledge);
        }

        #[test]
        fn edit_is_one_based() {
            assert_eq!(ConsoleCommand::parse("/edit 1"), ConsoleCommand::Edit(0));
            assert_eq!(ConsoleCommand::parse("/edit 12"), ConsoleCommand::Edit(11));
        }

        #[test]
        fn bad_edit_is_unknown() {
            assert!(matches!(ConsoleCommand::parse("/edit 0"), ConsoleCommand::Unknown(_)));
            assert!(matches!(ConsoleCommand::parse("/edit x"), ConsoleCommand::Unknown(_)));
            assert!(matches!(ConsoleCommand::parse("/edit"), ConsoleCommand::Unknown(_)));
        }

        #[test]
        fn plain_text_is_trimmed() {
            assert_eq!(
                ConsoleCommand::parse("  2024-01-01 \n"),
                ConsoleCommand::Text("2024-01-01".to_string())
            );
        }

        #[test]
        fn simple_commands() {
            assert_eq!(ConsoleCommand::parse("/back"), ConsoleCommand::Back);
            assert_eq!(ConsoleCommand::parse("/submit"), ConsoleCommand::Submit);
            assert_eq!(ConsoleCommand::parse("/unlock"), ConsoleCommand::Unlock);
            assert_eq!(ConsoleCommand::parse("/quit"), ConsoleCommand::Quit);
            assert!(matches!(ConsoleCommand::parse("/dance"), ConsoleCommand::Unknown(_)));
        }
    }

    mod render {
        use super::*;
        use crate::domain::intake::ReviewItem;
        use crate::domain::intake::ViewPosition;

        #[test]
        fn questions_carry_their_label() {
            let text = ConsolePresenter::new().render(&PresentationEvent::ShowQuestion {
                index: 1,
                total: 3,
                text: "What is the date?".to_string(),
            })
            .unwrap();

            assert_eq!(text, "Question 2 of 3\nWhat is the date?");
        }

        #[test]
        fn review_list_shows_every_answer() {
            let text = ConsolePresenter::new().render(&PresentationEvent::ShowReviewList {
                heading: "Review".to_string(),
                items: vec![
                    ReviewItem {
                        index: 0,
                        total: 2,
                        question: "A?".to_string(),
                        answer: "a".to_string(),
                    },
                    ReviewItem {
                        index: 1,
                        total: 2,
                        question: "B?".to_string(),
                        answer: "b".to_string(),
                    },
                ],
                view: ViewPosition::default(),
            })
            .unwrap();

            assert!(text.starts_with("Review"));
            assert!(text.contains("Question 1 of 2: A?\n  > a"));
            assert!(text.contains("Question 2 of 2: B?\n  > b"));
        }

        #[test]
        fn retraction_names_the_reopened_question() {
            let text = ConsolePresenter::new()
                .render(&PresentationEvent::RetractLastExchange { index: 0, total: 3 })
                .unwrap();

            assert_eq!(text, "(answer removed; question 1 of 3 is open again)");
        }

        #[test]
        fn locked_edits_after_a_failed_submit_are_explained() {
            let presenter = ConsolePresenter::new();
            let locked = PresentationEvent::SetEditsEnabled { enabled: false };

            presenter.render(&PresentationEvent::SetSubmitState {
                state: SubmitState::Pending,
            });
            assert_eq!(presenter.render(&locked), None);

            presenter.render(&PresentationEvent::SetSubmitState {
                state: SubmitState::Error,
            });
            assert_eq!(
                presenter.render(&locked).as_deref(),
                Some("(edits locked; type /unlock to re-enable them)")
            );
            assert_eq!(
                presenter.render(&PresentationEvent::SetEditsEnabled { enabled: true }),
                None
            );
        }

        #[test]
        fn kept_acknowledgement_controls_are_noted() {
            let presenter = ConsolePresenter::new();
            let retire = |removed| PresentationEvent::RetireAcknowledgement {
                step_id: "intro".to_string(),
                removed,
            };

            assert_eq!(presenter.render(&retire(false)).as_deref(), Some("(confirmed)"));
            assert_eq!(presenter.render(&retire(true)), None);
        }

        #[test]
        fn input_toggles_are_silent() {
            assert_eq!(ConsolePresenter::new().render(&PresentationEvent::EnableInput), None);
            assert_eq!(ConsolePresenter::new().render(&PresentationEvent::DisableInput), None);
            assert_eq!(
                ConsolePresenter::new().render(&PresentationEvent::SetBackEnabled { enabled: false }),
                None
            );
        }
    }
}
