//! Driving a requirement flow through a [`UserInterface`].
//!
//! The driver renders each step, turns prompt answers into
//! [`StepIntent`]s and applies them to the controller. Every step except
//! the last advances as soon as it is answered; the last step asks for a
//! final "Start Build" confirmation before the flow completes.

use tracing::debug;

use crate::error::{GateError, Result};
use crate::requirements::{AnswerMap, Choice};
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};
use crate::view::{show_step, CustomInputField, StepIntent, StepView, BACK_LABEL, START_LABEL};

use super::controller::FlowController;
use super::state::Transition;

/// Prompt key of the final confirmation.
pub const START_KEY: &str = "start-build";

const BACK_VALUE: &str = "back";
const START_VALUE: &str = "start";
const CANCEL_VALUE: &str = "cancel";

/// How a driven flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The completion callback received the answers.
    Completed,
    /// The user cancelled at the final confirmation.
    Cancelled,
}

/// Apply one user intent to the controller.
///
/// Answer intents are recorded for the requirement on screen; `Back` and
/// `Next` retreat and advance.
pub fn apply_intent<F>(controller: &mut FlowController<F>, intent: StepIntent) -> Result<Transition>
where
    F: FnOnce(AnswerMap),
{
    match intent {
        StepIntent::Back => controller.retreat(),
        StepIntent::Next => controller.advance(),
        intent => {
            let view = StepView::render(controller).ok_or(GateError::FlowCompleted)?;
            match view.answer_for(&intent) {
                Some(answer) => {
                    controller.record_answer(&view.requirement_id, answer)?;
                    Ok(Transition::Recorded)
                }
                None => Err(rejected_edit(controller, &view, intent)),
            }
        }
    }
}

/// Error for an edit made while the custom field is hidden.
fn rejected_edit<F>(controller: &FlowController<F>, view: &StepView, intent: StepIntent) -> GateError
where
    F: FnOnce(AnswerMap),
{
    let allows_custom = controller
        .requirements()
        .find(&view.requirement_id)
        .is_some_and(|r| r.allow_custom_input);

    let text = match intent {
        StepIntent::EditCustom(text) => text,
        _ => String::new(),
    };

    if allows_custom {
        GateError::InvalidAnswer {
            key: format!("{}-input", view.requirement_id),
            value: text,
        }
    } else {
        GateError::CustomInputNotAllowed {
            id: view.requirement_id.clone(),
        }
    }
}

/// Walks a flow to completion by prompting through a UI.
pub struct FlowDriver<'u> {
    ui: &'u mut dyn UserInterface,
    allow_back: bool,
}

impl<'u> FlowDriver<'u> {
    /// Create a driver. Back navigation is only offered on interactive UIs.
    pub fn new(ui: &'u mut dyn UserInterface) -> Self {
        let allow_back = ui.is_interactive();
        Self { ui, allow_back }
    }

    /// Prompt through every step until the flow completes or is cancelled.
    pub fn run<F>(&mut self, controller: &mut FlowController<F>) -> Result<FlowOutcome>
    where
        F: FnOnce(AnswerMap),
    {
        while let Some(view) = StepView::render(controller) {
            show_step(&mut *self.ui, &view);

            let intent = self.ask_choice(&view)?;
            if intent == StepIntent::Back {
                apply_intent(controller, intent)?;
                continue;
            }
            apply_intent(controller, intent)?;

            let previous = view
                .custom_input
                .as_ref()
                .map(|f| f.value.clone())
                .unwrap_or_default();
            if let Some(field) = StepView::render(controller).and_then(|v| v.custom_input) {
                let text = self.ask_custom(&field, &previous)?;
                if !text.is_empty() {
                    apply_intent(controller, field.edit(text))?;
                }
            }

            if !view.is_last() {
                apply_intent(controller, StepIntent::Next)?;
                continue;
            }

            match self.ask_start(&view)? {
                Some(intent) => {
                    apply_intent(controller, intent)?;
                }
                None => {
                    debug!("Requirement flow cancelled");
                    return Ok(FlowOutcome::Cancelled);
                }
            }
        }

        Ok(FlowOutcome::Completed)
    }

    fn offers_back(&self, view: &StepView) -> bool {
        self.allow_back && view.navigation.back_visible
    }

    fn ask_choice(&mut self, view: &StepView) -> Result<StepIntent> {
        let mut options: Vec<PromptOption> = view
            .options
            .iter()
            .map(|o| PromptOption::new(o.label, o.value.as_str()))
            .collect();
        if self.offers_back(view) {
            options.push(PromptOption::new(BACK_LABEL, BACK_VALUE));
        }

        let prompt = Prompt {
            key: view.requirement_id.clone(),
            question: "Your answer".to_string(),
            prompt_type: PromptType::Select { options },
            default: view.selected().map(|c| c.as_str().to_string()),
        };

        let value = self.ui.prompt(&prompt)?.into_string();
        if value == BACK_VALUE && self.offers_back(view) {
            return Ok(StepIntent::Back);
        }
        value
            .parse::<Choice>()
            .map(StepIntent::Select)
            .map_err(|_| GateError::InvalidAnswer {
                key: prompt.key,
                value,
            })
    }

    fn ask_custom(&mut self, field: &CustomInputField, previous: &str) -> Result<String> {
        let prompt = Prompt {
            key: field.id.clone(),
            question: field.label.to_string(),
            prompt_type: PromptType::Input { allow_empty: true },
            default: Some(previous.to_string()),
        };
        Ok(self.ui.prompt(&prompt)?.into_string())
    }

    /// `None` means the user cancelled.
    fn ask_start(&mut self, view: &StepView) -> Result<Option<StepIntent>> {
        let mut options = vec![PromptOption::new(START_LABEL, START_VALUE)];
        if self.offers_back(view) {
            options.push(PromptOption::new(BACK_LABEL, BACK_VALUE));
        }
        options.push(PromptOption::new("Cancel", CANCEL_VALUE));

        let prompt = Prompt {
            key: START_KEY.to_string(),
            question: "Ready to build?".to_string(),
            prompt_type: PromptType::Select { options },
            default: Some(START_VALUE.to_string()),
        };

        let value = self.ui.prompt(&prompt)?.into_string();
        match value.as_str() {
            START_VALUE => Ok(Some(StepIntent::Next)),
            BACK_VALUE if self.offers_back(view) => Ok(Some(StepIntent::Back)),
            CANCEL_VALUE => Ok(None),
            _ => Err(GateError::InvalidAnswer {
                key: prompt.key,
                value,
            }),
        }
    }
}
