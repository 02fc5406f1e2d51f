//! Shell completions generation.
//!
//! `buildgate completions <shell>` prints a completion script covering
//! every subcommand and global flag of the CLI.

use std::io::Write;

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::Shell;
use tracing::debug;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    shell: Shell,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { shell: args.shell }
    }

    /// Write the completion script for the selected shell.
    pub fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        let mut cli = Cli::command();
        let bin_name = cli.get_name().to_string();
        debug!(shell = %self.shell, bin = %bin_name, "Generating completions");

        clap_complete::generate(self.shell, &mut cli, bin_name, out);
        out.flush().context("Failed to write completions")?;
        Ok(())
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.write_to(&mut std::io::stdout().lock())?;
        Ok(CommandResult::success())
    }
}
