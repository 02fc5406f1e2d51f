//! List command implementation.
//!
//! The `buildgate list` command lists the configured requirements in the
//! order they are asked.

use anyhow::Context;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::theme::GateTheme;
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult, ProjectContext};
use super::{load_requirements, CONFIG_ERROR_EXIT};

/// The list command implementation.
pub struct ListCommand {
    context: ProjectContext,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: ProjectContext, args: ListArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some((config, requirements)) = load_requirements(&self.context, ui)? else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&requirements)
                .context("Failed to serialize requirements")?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            GateTheme::new()
        } else {
            GateTheme::plain()
        };

        ui.message(&format!("  {}", theme.header.apply_to(config.display_title())));
        for (index, requirement) in requirements.iter().enumerate() {
            let custom = if requirement.allow_custom_input {
                format!(" {}", theme.dim.apply_to("(accepts details)"))
            } else {
                String::new()
            };
            ui.message(&format!(
                "    {} {} {}{}",
                theme.step_number.apply_to(format!("{}.", index + 1)),
                theme.highlight.apply_to(&requirement.id),
                requirement.title,
                custom
            ));

            if !requirement.description.is_empty() {
                ui.message(&format!(
                    "       {}",
                    theme.dim.apply_to(&requirement.description)
                ));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".buildgate");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("requirements.yml"), config).unwrap();
        temp
    }

    fn command(root: &TempDir) -> ListCommand {
        ListCommand::new(
            ProjectContext {
                project_root: root.path().to_path_buf(),
                config_path: None,
            },
            ListArgs::default(),
        )
    }

    #[test]
    fn lists_builtin_requirements() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp).execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_message("docker-installed"));
        assert!(ui.has_message("config-ready"));
        assert!(ui.has_message("(accepts details)"));
    }

    #[test]
    fn lists_configured_requirements_in_order() {
        let temp = setup_project(
            "requirements:\n  - id: first\n    title: First\n    description: Check one\n  - id: second\n    title: Second\n",
        );
        let mut ui = MockUI::new();

        command(&temp).execute(&mut ui).unwrap();
        let first = ui.messages().iter().position(|m| m.contains("first")).unwrap();
        let second = ui.messages().iter().position(|m| m.contains("second")).unwrap();
        assert!(first < second);
        assert!(ui.has_message("Check one"));
    }

    #[test]
    fn invalid_config_fails() {
        let temp = setup_project("requirements: [");
        let mut ui = MockUI::new();

        let result = command(&temp).execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, CONFIG_ERROR_EXIT);
        assert!(ui.has_error("Failed to parse config"));
    }
}
