//! Check command implementation.
//!
//! The `buildgate check` command walks through every requirement, prints
//! the completion report and, when everything is met, runs the build.

use anyhow::Context;
use tracing::{debug, info};

use crate::cli::args::CheckArgs;
use crate::config::GateConfig;
use crate::error::Result;
use crate::flow::{FlowController, FlowDriver, FlowOutcome};
use crate::report::CompletionReport;
use crate::shell::{execute, CommandOptions};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult, ProjectContext};
use super::{load_requirements, CONFIG_ERROR_EXIT};

/// Exit code when requirements are unmet or the flow was cancelled.
pub const UNMET_EXIT: i32 = 1;

/// The check command implementation.
pub struct CheckCommand {
    context: ProjectContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: ProjectContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Build command to run, if any.
    fn build_command<'a>(&'a self, config: &'a GateConfig) -> Option<&'a str> {
        if self.args.no_build {
            return None;
        }
        self.args
            .build_command
            .as_deref()
            .or(config.settings.build_command.as_deref())
    }

    fn run_build(&self, command: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        info!(command, "Starting build");
        ui.message(&format!("Running: {}", command));

        let options = CommandOptions {
            cwd: Some(self.context.project_root.clone()),
            capture_stdout: false,
        };
        let result = execute(command, &options)?;
        debug!(exit_code = ?result.exit_code, duration = ?result.duration, "Build finished");

        if result.success {
            ui.success("Build finished");
            Ok(CommandResult::success())
        } else {
            let code = result.exit_code.unwrap_or(1);
            ui.error(&format!("Build failed with exit code {}", code));
            Ok(CommandResult::failure(code))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some((config, requirements)) = load_requirements(&self.context, ui)? else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        // Keep stdout clean for the JSON report
        if self.args.json {
            ui.set_output_mode(OutputMode::Silent);
        }

        ui.show_header(config.display_title());

        let mut delivered = None;
        let outcome = {
            let mut controller =
                FlowController::new(requirements.clone(), |answers| delivered = Some(answers));
            FlowDriver::new(&mut *ui).run(&mut controller)?
        };

        let answers = match (outcome, delivered) {
            (FlowOutcome::Completed, Some(answers)) => answers,
            _ => {
                ui.warning("Build cancelled");
                return Ok(CommandResult::failure(UNMET_EXIT));
            }
        };

        let report = CompletionReport::new(&requirements, &answers);
        debug!(unmet = ?report.unmet, "Requirement flow completed");
        if self.args.json {
            println!("{}", report.to_json().context("Failed to serialize report")?);
        } else {
            report.show(ui);
        }

        if !report.all_met {
            return Ok(CommandResult::failure(UNMET_EXIT));
        }

        match self.build_command(&config) {
            Some(command) => self.run_build(command, ui),
            None => Ok(CommandResult::success()),
        }
    }
}
