//! Stateless rendering of the current flow step.
//!
//! A [`StepView`] is rebuilt from the controller after every interaction.
//! It owns no state beyond what it was rendered from; user actions on it
//! come back as [`StepIntent`]s for the flow driver to apply.
//!
//! # Example
//!
//! ```
//! use buildgate::flow::FlowController;
//! use buildgate::requirements::{Answer, Choice, RequirementSet};
//! use buildgate::view::StepView;
//!
//! let mut flow = FlowController::new(RequirementSet::builtin(), |_| {});
//! let view = StepView::render(&flow).unwrap();
//! assert_eq!(view.indicator(), "Step 1 of 3");
//! assert!(!view.navigation.next_enabled);
//!
//! flow.record_answer("docker-installed", Answer::Yes).unwrap();
//! let view = StepView::render(&flow).unwrap();
//! assert!(view.option(Choice::Yes).checked);
//! assert!(view.navigation.next_enabled);
//! ```

pub mod display;
pub mod option;

pub use display::show_step;
pub use option::{CustomInputField, OptionControl};

use crate::flow::{CurrentStep, FlowController};
use crate::requirements::{Answer, AnswerMap, Choice, RequirementDefinition};

/// Label of the advance control on every step but the last.
pub const NEXT_LABEL: &str = "Next";

/// Label of the advance control on the last step.
pub const START_LABEL: &str = "Start Build";

/// Label of the retreat control.
pub const BACK_LABEL: &str = "Back";

/// A user action reported by a step view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepIntent {
    /// One of the option controls was selected.
    Select(Choice),
    /// The custom-input field now holds this text.
    EditCustom(String),
    /// The back control was pressed.
    Back,
    /// The next/start control was pressed.
    Next,
}

/// Navigation affordances for a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView {
    /// Back is hidden on the first step.
    pub back_visible: bool,
    /// "Next", or "Start Build" on the last step.
    pub next_label: &'static str,
    /// Enabled once the step has an answer.
    pub next_enabled: bool,
}

/// Everything needed to draw one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub requirement_id: String,
    pub title: String,
    pub description: String,
    /// The yes control followed by the no control.
    pub options: [OptionControl; 2],
    pub custom_input: Option<CustomInputField>,
    pub navigation: NavigationView,
    /// One-based step number.
    pub step_number: usize,
    pub step_count: usize,
}

impl StepView {
    /// Render the controller's current step, or `None` once it is complete.
    pub fn render<F>(controller: &FlowController<F>) -> Option<Self>
    where
        F: FnOnce(AnswerMap),
    {
        controller.current_step().map(|step| Self::from_step(&step))
    }

    /// Render from a [`CurrentStep`].
    pub fn from_step(step: &CurrentStep<'_>) -> Self {
        Self::for_step(step.requirement, step.answer, step.index, step.count)
    }

    /// Render a requirement at `index` of `count` with its recorded answer.
    pub fn for_step(
        requirement: &RequirementDefinition,
        answer: Option<&Answer>,
        index: usize,
        count: usize,
    ) -> Self {
        let checked = answer.map(Answer::choice);
        let id = requirement.id.as_str();

        let custom_input = match answer {
            Some(Answer::No { custom_value }) if requirement.allow_custom_input => Some(
                CustomInputField::new(id, custom_value.as_deref().unwrap_or_default()),
            ),
            _ => None,
        };

        Self {
            requirement_id: requirement.id.clone(),
            title: requirement.title.clone(),
            description: requirement.description.clone(),
            options: [
                OptionControl::new(id, Choice::Yes, checked == Some(Choice::Yes)),
                OptionControl::new(id, Choice::No, checked == Some(Choice::No)),
            ],
            custom_input,
            navigation: NavigationView {
                back_visible: index > 0,
                next_label: if index + 1 < count {
                    NEXT_LABEL
                } else {
                    START_LABEL
                },
                next_enabled: answer.is_some(),
            },
            step_number: index + 1,
            step_count: count,
        }
    }

    /// The control for a choice.
    pub fn option(&self, choice: Choice) -> &OptionControl {
        match choice {
            Choice::Yes => &self.options[0],
            Choice::No => &self.options[1],
        }
    }

    /// The checked choice, if any.
    pub fn selected(&self) -> Option<Choice> {
        self.options.iter().find(|o| o.checked).map(|o| o.value)
    }

    /// Whether this is the final step.
    pub fn is_last(&self) -> bool {
        self.step_number == self.step_count
    }

    /// "Step N of M".
    pub fn indicator(&self) -> String {
        format!("Step {} of {}", self.step_number, self.step_count)
    }

    /// The answer an intent should record, if it records one.
    ///
    /// Edits only produce an answer while the custom field is shown.
    pub fn answer_for(&self, intent: &StepIntent) -> Option<Answer> {
        match intent {
            StepIntent::Select(choice) => Some(Answer::from_choice(*choice)),
            StepIntent::EditCustom(text) => self
                .custom_input
                .as_ref()
                .map(|_| Answer::no_with(text.clone())),
            StepIntent::Back | StepIntent::Next => None,
        }
    }
}
