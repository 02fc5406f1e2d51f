//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`buildgate check`, `buildgate list`)
//! - Shared configuration loading
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod schema;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, ProjectContext};

use crate::config::{load_config, GateConfig};
use crate::error::{GateError, Result};
use crate::requirements::RequirementSet;
use crate::ui::{OutputMode, UserInterface};

/// Exit code for configuration problems.
pub const CONFIG_ERROR_EXIT: i32 = 2;

/// Load the requirements for a command.
///
/// Configuration problems are reported through the UI and yield `None`;
/// the caller should exit with [`CONFIG_ERROR_EXIT`].
pub(crate) fn load_requirements(
    context: &ProjectContext,
    ui: &mut dyn UserInterface,
) -> Result<Option<(GateConfig, RequirementSet)>> {
    let loaded = match load_config(&context.project_root, context.config_override()) {
        Ok(loaded) => loaded,
        Err(e) if is_config_error(&e) => {
            ui.error(&e.to_string());
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    // Apply config default_output when no CLI flag was explicitly set
    if ui.output_mode() == OutputMode::Normal {
        ui.set_output_mode(loaded.config.settings.default_output.into());
    }

    match loaded.config.requirement_set() {
        Ok(set) => Ok(Some((loaded.config, set))),
        Err(e) if is_config_error(&e) => {
            ui.error(&e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn is_config_error(error: &GateError) -> bool {
    matches!(
        error,
        GateError::ConfigNotFound { .. }
            | GateError::ConfigParseError { .. }
            | GateError::ConfigValidationError { .. }
            | GateError::EmptyRequirementSet
            | GateError::DuplicateRequirementId { .. }
            | GateError::InvalidRequirement { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn context(root: &TempDir, config: Option<PathBuf>) -> ProjectContext {
        ProjectContext {
            project_root: root.path().to_path_buf(),
            config_path: config,
        }
    }

    #[test]
    fn loads_builtin_without_file() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let (_, set) = load_requirements(&context(&temp, None), &mut ui)
            .unwrap()
            .unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn reports_duplicate_ids() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reqs.yml");
        fs::write(
            &path,
            "requirements:\n  - id: a\n    title: A\n  - id: a\n    title: B\n",
        )
        .unwrap();

        let mut ui = MockUI::new();
        let loaded = load_requirements(&context(&temp, Some(path)), &mut ui).unwrap();
        assert!(loaded.is_none());
        assert!(ui.has_error("Duplicate requirement id: a"));
    }

    #[test]
    fn applies_default_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reqs.yml");
        fs::write(
            &path,
            "settings:\n  default_output: quiet\nrequirements:\n  - id: a\n    title: A\n",
        )
        .unwrap();

        let mut ui = MockUI::new();
        load_requirements(&context(&temp, Some(path)), &mut ui).unwrap();
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn explicit_output_flag_wins() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reqs.yml");
        fs::write(
            &path,
            "settings:\n  default_output: quiet\nrequirements:\n  - id: a\n    title: A\n",
        )
        .unwrap();

        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        load_requirements(&context(&temp, Some(path)), &mut ui).unwrap();
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
