//! The requirement flow state machine.
//!
//! A [`FlowController`] walks through a [`RequirementSet`] one step at a
//! time. Each step must be answered before it can be advanced; advancing
//! from the last step delivers a snapshot of every answer to the completion
//! callback and ends the flow.
//!
//! Rejected operations return an error and leave the state untouched.
//!
//! # Example
//!
//! ```
//! use buildgate::flow::FlowController;
//! use buildgate::requirements::{Answer, RequirementDefinition, RequirementSet};
//!
//! let set = RequirementSet::new(vec![
//!     RequirementDefinition::new("a", "First"),
//!     RequirementDefinition::new("b", "Second").with_custom_input(),
//! ])
//! .unwrap();
//!
//! let mut delivered = None;
//! let mut flow = FlowController::new(set, |answers| delivered = Some(answers));
//! flow.record_answer("a", Answer::Yes).unwrap();
//! flow.advance().unwrap();
//! flow.record_answer("b", Answer::no_with("missing docker")).unwrap();
//! flow.advance().unwrap();
//! assert!(flow.is_complete());
//! drop(flow);
//!
//! assert!(delivered.unwrap().all_requirements_met());
//! ```

use tracing::debug;

use crate::error::{GateError, Result};
use crate::requirements::{Answer, AnswerMap, RequirementDefinition, RequirementSet};

use super::state::{CurrentStep, FlowPhase, FlowState, Transition};

/// Owns the flow state for one traversal of a requirement set.
pub struct FlowController<F>
where
    F: FnOnce(AnswerMap),
{
    requirements: RequirementSet,
    state: FlowState,
    on_complete: Option<F>,
}

impl<F> FlowController<F>
where
    F: FnOnce(AnswerMap),
{
    /// Start a flow at the first requirement with no answers.
    pub fn new(requirements: RequirementSet, on_complete: F) -> Self {
        debug!(steps = requirements.len(), "Starting requirement flow");
        Self {
            requirements,
            state: FlowState::default(),
            on_complete: Some(on_complete),
        }
    }

    /// The requirement set driving this flow.
    pub fn requirements(&self) -> &RequirementSet {
        &self.requirements
    }

    /// Current flow state.
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Answers recorded so far.
    pub fn answers(&self) -> &AnswerMap {
        &self.state.answers
    }

    /// Zero-based index of the current step.
    pub fn step_index(&self) -> usize {
        self.state.current_step
    }

    /// Total number of steps.
    pub fn step_count(&self) -> usize {
        self.requirements.len()
    }

    /// Whether the completion callback has fired.
    pub fn is_complete(&self) -> bool {
        self.on_complete.is_none()
    }

    /// Current phase of the flow.
    pub fn phase(&self) -> FlowPhase {
        if self.is_complete() {
            FlowPhase::Completed
        } else {
            FlowPhase::AtStep(self.state.current_step)
        }
    }

    /// The requirement on screen and its answer, or `None` once complete.
    pub fn current_step(&self) -> Option<CurrentStep<'_>> {
        if self.is_complete() {
            return None;
        }
        let requirement = self.current_requirement();
        Some(CurrentStep {
            index: self.state.current_step,
            count: self.requirements.len(),
            requirement,
            answer: self.state.answers.get(&requirement.id),
        })
    }

    /// Whether `advance` would be accepted.
    pub fn can_advance(&self) -> bool {
        !self.is_complete() && self.state.answers.contains(&self.current_requirement().id)
    }

    /// Whether `retreat` would be accepted.
    pub fn can_retreat(&self) -> bool {
        !self.is_complete() && self.state.current_step > 0
    }

    /// Record an answer for the requirement on screen.
    ///
    /// Replaces any earlier answer for the same requirement. Does not move
    /// to the next step.
    pub fn record_answer(&mut self, id: &str, answer: Answer) -> Result<()> {
        self.ensure_active()?;

        let requirement = self.current_requirement();
        if requirement.id != id {
            return Err(GateError::StepMismatch {
                expected: requirement.id.clone(),
                actual: id.to_string(),
            });
        }
        if answer.is_compound() && !requirement.allow_custom_input {
            return Err(GateError::CustomInputNotAllowed { id: id.to_string() });
        }

        debug!(requirement = id, answer = %answer, "Recorded answer");
        self.state.answers.upsert(id, answer);
        Ok(())
    }

    /// Move to the next step, or complete the flow from the last step.
    pub fn advance(&mut self) -> Result<Transition> {
        self.ensure_active()?;

        let id = &self.current_requirement().id;
        if !self.state.answers.contains(id) {
            return Err(GateError::StepUnanswered { id: id.clone() });
        }

        let from = self.state.current_step;
        if from + 1 < self.requirements.len() {
            self.state.current_step += 1;
            debug!(from, to = from + 1, "Advanced requirement flow");
            return Ok(Transition::Moved { from, to: from + 1 });
        }

        if let Some(on_complete) = self.on_complete.take() {
            debug!(answers = self.state.answers.len(), "Requirement flow complete");
            on_complete(self.state.answers.clone());
        }
        Ok(Transition::Completed)
    }

    /// Go back one step, keeping the answer of the step being left.
    pub fn retreat(&mut self) -> Result<Transition> {
        self.ensure_active()?;

        let from = self.state.current_step;
        if from == 0 {
            return Err(GateError::AtFirstStep);
        }
        self.state.current_step -= 1;
        debug!(from, to = from - 1, "Retreated requirement flow");
        Ok(Transition::Moved { from, to: from - 1 })
    }

    fn current_requirement(&self) -> &RequirementDefinition {
        // current_step is kept in range and the set is never empty
        &self.requirements.as_slice()[self.state.current_step]
    }

    fn ensure_active(&self) -> Result<()> {
        if self.is_complete() {
            Err(GateError::FlowCompleted)
        } else {
            Ok(())
        }
    }
}

impl<F> std::fmt::Debug for FlowController<F>
where
    F: FnOnce(AnswerMap),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowController")
            .field("requirements", &self.requirements)
            .field("state", &self.state)
            .field("complete", &self.is_complete())
            .finish()
    }
}
