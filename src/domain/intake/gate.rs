//! Acknowledgement gate: a forward-only chain of confirm-to-continue steps.

use serde::{Deserialize, Serialize};

/// One informational step that needs a single explicit confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateStep {
    /// Identifies the step in acknowledgements coming back from the UI.
    pub id: String,
    pub message: String,
    pub button_label: String,
    /// Remove the confirmation control once used; otherwise leave it
    /// visible but disabled.
    #[serde(default = "default_remove_on_confirm")]
    pub remove_on_confirm: bool,
}

fn default_remove_on_confirm() -> bool {
    true
}

impl GateStep {
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        button_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            button_label: button_label.into(),
            remove_on_confirm: true,
        }
    }

    /// Keeps the confirmation control on screen, disabled, after use.
    pub fn keep_after_confirm(mut self) -> Self {
        self.remove_on_confirm = false;
        self
    }
}

/// Result of an acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AckOutcome {
    /// The current step was confirmed; `next` is the step now showing, if
    /// any remain.
    Advanced {
        confirmed: GateStep,
        next: Option<GateStep>,
    },
    /// Stale or repeated activation; nothing changed.
    Ignored,
}

/// Ordered steps confirmed one at a time. No skipping, no going back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcknowledgementGate {
    steps: Vec<GateStep>,
    cursor: usize,
}

impl AcknowledgementGate {
    pub fn new(steps: Vec<GateStep>) -> Self {
        Self { steps, cursor: 0 }
    }

    pub fn single(step: GateStep) -> Self {
        Self::new(vec![step])
    }

    /// The step awaiting confirmation.
    pub fn current(&self) -> Option<&GateStep> {
        self.steps.get(self.cursor)
    }

    /// True once every step has been confirmed (immediately, for no steps).
    pub fn is_open(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Confirms `step_id` if it is the step currently showing.
    ///
    /// A second activation of an already confirmed step, or an activation
    /// for a step not yet shown, is ignored.
    pub fn acknowledge(&mut self, step_id: &str) -> AckOutcome {
        match self.steps.get(self.cursor) {
            Some(step) if step.id == step_id => {
                let confirmed = step.clone();
                self.cursor += 1;
                AckOutcome::Advanced {
                    confirmed,
                    next: self.current().cloned(),
                }
            }
            _ => AckOutcome::Ignored,
        }
    }
}
