//! Library integration tests.

use buildgate::GateError;

#[test]
fn error_types_are_public() {
    let err = GateError::DuplicateRequirementId {
        id: "docker-installed".into(),
    };
    assert!(err.to_string().contains("docker-installed"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> buildgate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use buildgate::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["buildgate", "check", "--json"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
        assert!(!args.non_interactive);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn ui_types_are_public() {
    use buildgate::ui::{MockUI, OutputMode, UserInterface};

    let mut ui = MockUI::new();
    ui.message("hello");
    assert!(ui.has_message("hello"));
    assert_eq!(ui.output_mode(), OutputMode::Normal);
}

#[test]
fn config_types_are_public() {
    use buildgate::config::{validate, GateConfig};

    let config = GateConfig::builtin();
    assert!(validate(&config).is_ok());
    assert_eq!(config.requirement_set().unwrap().len(), 3);
}
