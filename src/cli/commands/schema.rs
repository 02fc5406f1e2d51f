//! Schema command implementation.
//!
//! The `buildgate schema` command prints the JSON schema of the
//! requirements file, for editor integration.

use anyhow::Context;

use crate::config::GateConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }

    /// Render the requirements file schema.
    pub fn render() -> Result<String> {
        let schema = schemars::schema_for!(GateConfig);
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        Ok(json)
    }
}

impl Command for SchemaCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        println!("{}", Self::render()?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_describes_requirements() {
        let json = SchemaCommand::render().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "GateConfig");
        assert!(value["properties"]["requirements"].is_object());
        assert!(value["properties"]["settings"].is_object());
    }

    #[test]
    fn schema_lists_output_modes() {
        let json = SchemaCommand::render().unwrap();
        assert!(json.contains("\"quiet\""));
        assert!(json.contains("allow_custom_input"));
    }
}
