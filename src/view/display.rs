//! Writing a step view to a [`UserInterface`].

use crate::ui::UserInterface;

use super::StepView;

/// Show the title, description, step indicator and any prior answer.
pub fn show_step(ui: &mut dyn UserInterface, view: &StepView) {
    ui.show_header(&view.title);
    ui.show_progress(view.step_number, view.step_count);
    if !view.description.is_empty() {
        ui.message(&view.description);
    }

    if let Some(choice) = view.selected() {
        let mut line = format!("Current answer: {}", choice.label());
        if let Some(field) = view.custom_input.as_ref().filter(|f| !f.value.is_empty()) {
            line.push_str(&format!(" ({})", field.value));
        }
        ui.show_hint(&line);
    }
}
