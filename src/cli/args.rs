//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Buildgate - Walk through build prerequisites before building.
#[derive(Debug, Parser)]
#[command(name = "buildgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to requirements file (overrides default .buildgate/requirements.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether the selected command asked for non-interactive mode.
    pub fn non_interactive(&self) -> bool {
        matches!(&self.command, Some(Commands::Check(args)) if args.non_interactive)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Walk through the requirements (default if no command specified)
    Check(CheckArgs),

    /// List configured requirements
    List(ListArgs),

    /// Validate the requirements file
    Validate,

    /// Print the JSON schema of the requirements file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Answer from BUILDGATE_ANSWER_* variables, no prompts
    #[arg(long)]
    pub non_interactive: bool,

    /// Print the completion report as JSON
    #[arg(long)]
    pub json: bool,

    /// Command to run once every requirement is met
    #[arg(long, value_name = "CMD")]
    pub build_command: Option<String>,

    /// Never run the build command
    #[arg(long, conflicts_with = "build_command")]
    pub no_build: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
