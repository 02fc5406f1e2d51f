//! Option controls and the conditional custom-input field.

use crate::requirements::Choice;

use super::StepIntent;

/// One of the two mutually exclusive yes/no controls of a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionControl {
    /// Element id, `<requirement>-yes` or `<requirement>-no`.
    pub id: String,
    /// Group name shared by both controls (the requirement id).
    pub name: String,
    pub value: Choice,
    pub label: &'static str,
    /// Whether the recorded answer has this value.
    pub checked: bool,
}

impl OptionControl {
    pub(crate) fn new(requirement_id: &str, value: Choice, checked: bool) -> Self {
        Self {
            id: format!("{}-{}", requirement_id, value.as_str()),
            name: requirement_id.to_string(),
            value,
            label: value.label(),
            checked,
        }
    }

    /// The intent reported when this control is selected.
    pub fn select(&self) -> StepIntent {
        StepIntent::Select(self.value)
    }
}

/// Free-text field shown under a `no` answer when the requirement allows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomInputField {
    /// Element id, `<requirement>-input`.
    pub id: String,
    pub label: &'static str,
    /// Text typed so far.
    pub value: String,
}

impl CustomInputField {
    pub(crate) fn new(requirement_id: &str, value: &str) -> Self {
        Self {
            id: format!("{}-input", requirement_id),
            label: "Please specify:",
            value: value.to_string(),
        }
    }

    /// The intent reported for an edit; each edit replaces the whole text.
    pub fn edit(&self, text: impl Into<String>) -> StepIntent {
        StepIntent::EditCustom(text.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_ids_follow_requirement() {
        let yes = OptionControl::new("docker-installed", Choice::Yes, true);
        assert_eq!(yes.id, "docker-installed-yes");
        assert_eq!(yes.name, "docker-installed");
        assert_eq!(yes.label, "Yes");
        assert!(yes.checked);
        assert_eq!(yes.select(), StepIntent::Select(Choice::Yes));
    }

    #[test]
    fn custom_field_reports_full_text() {
        let field = CustomInputField::new("deps", "old");
        assert_eq!(field.id, "deps-input");
        assert_eq!(field.label, "Please specify:");
        assert_eq!(field.value, "old");
        assert_eq!(
            field.edit("new text"),
            StepIntent::EditCustom("new text".to_string())
        );
    }
}
