//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - At least one requirement must be defined
//! - Requirement ids must be non-blank and unique
//! - Requirements must have a title

use std::collections::HashSet;

use crate::config::schema::GateConfig;
use crate::error::{GateError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Requirement id if the error is requirement-specific
    pub requirement: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: String, requirement: Option<&str>) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            requirement: requirement.map(String::from),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &GateConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.requirements.is_empty() {
        errors.push(ValidationError::new(
            "empty-requirements",
            "At least one requirement must be defined".to_string(),
            None,
        ));
        return errors;
    }

    let mut seen = HashSet::new();
    for (index, requirement) in config.requirements.iter().enumerate() {
        let id = requirement.id.trim();
        if id.is_empty() {
            errors.push(ValidationError::new(
                "blank-id",
                format!("Requirement #{} has an empty id", index + 1),
                None,
            ));
            continue;
        }

        if !seen.insert(id) {
            errors.push(ValidationError::new(
                "duplicate-id",
                format!("Requirement id '{}' is used more than once", id),
                Some(id),
            ));
        }

        if requirement.title.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-title",
                format!("Requirement '{}' has no title", id),
                Some(id),
            ));
        }
    }

    errors
}

/// Validate a configuration, returning an error if invalid.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &GateConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(GateError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::RequirementDefinition;

    fn config(requirements: Vec<RequirementDefinition>) -> GateConfig {
        GateConfig {
            requirements,
            ..Default::default()
        }
    }

    fn rules(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.rule.as_str()).collect()
    }

    #[test]
    fn valid_config_returns_no_errors() {
        assert!(validate_config(&GateConfig::builtin()).is_empty());
        assert!(validate(&GateConfig::builtin()).is_ok());
    }

    #[test]
    fn empty_requirements_rejected() {
        let errors = validate_config(&config(vec![]));
        assert_eq!(rules(&errors), vec!["empty-requirements"]);
    }

    #[test]
    fn duplicate_and_blank_ids_reported_together() {
        let errors = validate_config(&config(vec![
            RequirementDefinition::new("a", "A"),
            RequirementDefinition::new("", "Blank"),
            RequirementDefinition::new("a", "Again"),
        ]));
        assert_eq!(rules(&errors), vec!["blank-id", "duplicate-id"]);
        assert_eq!(errors[1].requirement.as_deref(), Some("a"));
    }

    #[test]
    fn missing_title_reported() {
        let errors = validate_config(&config(vec![RequirementDefinition::new("a", " ")]));
        assert_eq!(rules(&errors), vec!["missing-title"]);
    }

    #[test]
    fn validate_joins_messages() {
        let err = validate(&config(vec![
            RequirementDefinition::new("a", ""),
            RequirementDefinition::new("a", "A"),
        ]))
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("no title"));
        assert!(msg.contains("more than once"));
    }
}
