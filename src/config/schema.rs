//! Configuration schema definitions for buildgate.
//!
//! This module contains the struct definitions that map to the
//! `.buildgate/requirements.yml` file format.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::requirements::{RequirementDefinition, RequirementSet};

/// Root configuration structure for requirements.yml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Heading shown before the first requirement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Global settings
    pub settings: Settings,

    /// Requirements, asked in this order
    pub requirements: Vec<RequirementDefinition>,
}

impl GateConfig {
    /// Configuration used when no requirements file exists.
    pub fn builtin() -> Self {
        Self {
            title: None,
            settings: Settings::default(),
            requirements: RequirementSet::builtin().iter().cloned().collect(),
        }
    }

    /// Build the validated requirement set.
    pub fn requirement_set(&self) -> Result<RequirementSet> {
        RequirementSet::new(self.requirements.clone())
    }

    /// Heading for the checklist.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Build requirements")
    }
}

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,

    /// Command run once every requirement is met
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
title: Jetson build
settings:
  default_output: quiet
  build_command: make all
requirements:
  - id: docker-installed
    title: Docker Check
    description: Is Docker installed and running?
  - id: dependencies
    title: Dependencies
    allow_custom_input: true
"#;
        let config: GateConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.display_title(), "Jetson build");
        assert_eq!(config.settings.default_output, OutputMode::Quiet);
        assert_eq!(config.settings.build_command.as_deref(), Some("make all"));
        assert_eq!(config.requirements.len(), 2);
        assert!(config.requirements[1].allow_custom_input);
    }

    #[test]
    fn settings_default_when_missing() {
        let yaml = "requirements:\n  - id: a\n    title: A\n";
        let config: GateConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.settings.default_output, OutputMode::Normal);
        assert_eq!(config.display_title(), "Build requirements");
    }

    #[test]
    fn rejects_unknown_fields() {
        let yaml = "requirements: []\nsteps: {}\n";
        let result: std::result::Result<GateConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn builtin_config_builds_a_set() {
        let set = GateConfig::builtin().requirement_set().unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn empty_requirements_fail_to_build() {
        let config = GateConfig::default();
        assert!(config.requirement_set().is_err());
    }
}
