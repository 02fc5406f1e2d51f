//! Flow state, phases, and transitions.

use crate::requirements::{Answer, AnswerMap, RequirementDefinition};

/// Mutable state owned by a single [`FlowController`](super::FlowController).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowState {
    /// Index into the requirement set; always valid.
    pub current_step: usize,
    /// Answers recorded so far.
    pub answers: AnswerMap,
}

/// Where the flow is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    /// Showing the requirement at this index.
    AtStep(usize),
    /// Answers have been delivered to the completion callback.
    Completed,
}

/// The effect of a successful flow operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// An answer was recorded; the step did not change.
    Recorded,
    /// The current step changed.
    Moved { from: usize, to: usize },
    /// The last step was advanced and the callback fired.
    Completed,
}

/// The requirement on screen and its recorded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentStep<'a> {
    /// Zero-based step index.
    pub index: usize,
    /// Total number of steps.
    pub count: usize,
    pub requirement: &'a RequirementDefinition,
    pub answer: Option<&'a Answer>,
}

impl CurrentStep<'_> {
    /// Whether this is the final step.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }
}
