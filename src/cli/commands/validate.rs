//! Validate command implementation.
//!
//! The `buildgate validate` command checks the requirements file and
//! reports every problem at once.

use crate::config::{load_config, validate_config, ConfigSource};
use crate::error::{GateError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};
use super::CONFIG_ERROR_EXIT;

/// The validate command implementation.
pub struct ValidateCommand {
    context: ProjectContext,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(context: ProjectContext) -> Self {
        Self { context }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = match load_config(&self.context.project_root, self.context.config_override()) {
            Ok(loaded) => loaded,
            Err(e @ (GateError::ConfigNotFound { .. } | GateError::ConfigParseError { .. })) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
            }
            Err(e) => return Err(e),
        };

        let source = match &loaded.source {
            ConfigSource::File(path) => path.display().to_string(),
            ConfigSource::Builtin => "built-in checklist".to_string(),
        };

        let errors = validate_config(&loaded.config);
        if errors.is_empty() {
            ui.success(&format!(
                "{} is valid ({} requirements)",
                source,
                loaded.config.requirements.len()
            ));
            return Ok(CommandResult::success());
        }

        for error in &errors {
            ui.error(&format!("[{}] {}", error.rule, error.message));
        }
        ui.message(&format!("{} problem(s) found in {}", errors.len(), source));
        Ok(CommandResult::failure(CONFIG_ERROR_EXIT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run(config: Option<&str>) -> (CommandResult, MockUI) {
        let temp = TempDir::new().unwrap();
        if let Some(config) = config {
            let dir = temp.path().join(".buildgate");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("requirements.yml"), config).unwrap();
        }
        let cmd = ValidateCommand::new(ProjectContext {
            project_root: temp.path().to_path_buf(),
            config_path: None,
        });
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn builtin_is_valid() {
        let (result, ui) = run(None);
        assert!(result.success);
        assert!(ui.has_success("built-in checklist is valid"));
    }

    #[test]
    fn reports_every_problem() {
        let (result, ui) = run(Some(
            "requirements:\n  - id: a\n    title: A\n  - id: ''\n    title: Blank\n  - id: a\n    title: Again\n",
        ));
        assert_eq!(result.exit_code, CONFIG_ERROR_EXIT);
        assert!(ui.has_error("[blank-id]"));
        assert!(ui.has_error("[duplicate-id]"));
        assert!(ui.has_message("2 problem(s) found"));
    }

    #[test]
    fn empty_requirements_reported() {
        let (result, ui) = run(Some("requirements: []\n"));
        assert_eq!(result.exit_code, CONFIG_ERROR_EXIT);
        assert!(ui.has_error("[empty-requirements]"));
    }

    #[test]
    fn parse_errors_reported() {
        let (result, ui) = run(Some("requirements: {"));
        assert_eq!(result.exit_code, CONFIG_ERROR_EXIT);
        assert!(ui.has_error("Failed to parse config"));
    }
}
