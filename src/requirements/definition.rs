//! Requirement definitions and ordered requirement sets.
//!
//! A [`RequirementSet`] is built once by the caller before a flow starts and
//! is never mutated afterwards. Its order defines the step sequence.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{GateError, Result};

/// A single yes/no prerequisite question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RequirementDefinition {
    /// Unique identifier within a requirement set
    pub id: String,

    /// Short label for display
    pub title: String,

    /// Explanatory text shown under the title
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Ask for free text when the answer is "no"
    #[serde(default, alias = "allowCustomInput", skip_serializing_if = "is_false")]
    pub allow_custom_input: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl RequirementDefinition {
    /// Create a requirement that only accepts yes/no.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            allow_custom_input: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Ask for free text when this requirement is answered "no".
    pub fn with_custom_input(mut self) -> Self {
        self.allow_custom_input = true;
        self
    }
}

/// Ordered, validated, non-empty list of requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequirementSet {
    requirements: Vec<RequirementDefinition>,
}

impl RequirementSet {
    /// Build a set, rejecting empty lists, blank ids and duplicate ids.
    pub fn new(requirements: Vec<RequirementDefinition>) -> Result<Self> {
        if let Some(err) = Self::problems(&requirements).into_iter().next() {
            return Err(err);
        }
        Ok(Self { requirements })
    }

    /// Collect every problem with a requirement list instead of stopping at
    /// the first one.
    pub fn problems(requirements: &[RequirementDefinition]) -> Vec<GateError> {
        let mut problems = Vec::new();

        if requirements.is_empty() {
            problems.push(GateError::EmptyRequirementSet);
            return problems;
        }

        let mut seen = HashSet::new();
        for (index, requirement) in requirements.iter().enumerate() {
            if requirement.id.trim().is_empty() {
                problems.push(GateError::InvalidRequirement {
                    message: format!("requirement #{} has an empty id", index + 1),
                });
                continue;
            }
            if !seen.insert(requirement.id.as_str()) {
                problems.push(GateError::DuplicateRequirementId {
                    id: requirement.id.clone(),
                });
            }
        }

        problems
    }

    /// The checklist used when no requirement file is configured.
    pub fn builtin() -> Self {
        Self {
            requirements: vec![
                RequirementDefinition::new("docker-installed", "Docker Check")
                    .with_description("Is Docker installed and running?"),
                RequirementDefinition::new("config-ready", "Configuration Ready")
                    .with_description("Have you prepared your configuration file?"),
                RequirementDefinition::new("dependencies", "Dependencies")
                    .with_description("Are all dependencies installed?")
                    .with_custom_input(),
            ],
        }
    }

    /// Number of requirements (always at least one).
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Requirement at a step index.
    pub fn get(&self, index: usize) -> Option<&RequirementDefinition> {
        self.requirements.get(index)
    }

    /// Requirement with the given id.
    pub fn find(&self, id: &str) -> Option<&RequirementDefinition> {
        self.requirements.iter().find(|r| r.id == id)
    }

    /// Step index of the requirement with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.requirements.iter().position(|r| r.id == id)
    }

    /// Requirements in step order.
    pub fn as_slice(&self) -> &[RequirementDefinition] {
        &self.requirements
    }

    /// Iterate requirements in step order.
    pub fn iter(&self) -> std::slice::Iter<'_, RequirementDefinition> {
        self.requirements.iter()
    }
}

impl TryFrom<Vec<RequirementDefinition>> for RequirementSet {
    type Error = GateError;

    fn try_from(requirements: Vec<RequirementDefinition>) -> Result<Self> {
        Self::new(requirements)
    }
}

impl<'a> IntoIterator for &'a RequirementSet {
    type Item = &'a RequirementDefinition;
    type IntoIter = std::slice::Iter<'a, RequirementDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
