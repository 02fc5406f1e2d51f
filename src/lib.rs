//! Buildgate - Walk through build prerequisites before building.
//!
//! Buildgate asks an ordered list of yes/no requirement questions, lets
//! selected requirements carry a free-text explanation when answered "no",
//! and hands the collected answers to a completion handler once the last
//! step is confirmed.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Requirements file loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`flow`] - Step-by-step flow state and navigation
//! - [`report`] - Completion report for delivered answers
//! - [`requirements`] - Requirement definitions and answers
//! - [`shell`] - Build command execution
//! - [`ui`] - Interactive prompts and terminal output
//! - [`view`] - Per-step presentation model
//!
//! # Example
//!
//! ```
//! use buildgate::flow::FlowController;
//! use buildgate::requirements::{Answer, RequirementDefinition, RequirementSet};
//!
//! let set = RequirementSet::new(vec![
//!     RequirementDefinition::new("a", "Docker Check"),
//!     RequirementDefinition::new("b", "Dependencies").with_custom_input(),
//! ])
//! .unwrap();
//!
//! let mut delivered = None;
//! {
//!     let mut flow = FlowController::new(set, |answers| delivered = Some(answers));
//!     flow.record_answer("a", Answer::Yes).unwrap();
//!     flow.advance().unwrap();
//!     flow.record_answer("b", Answer::no_with("missing docker")).unwrap();
//!     flow.advance().unwrap();
//!     assert!(flow.is_complete());
//! }
//!
//! assert!(delivered.unwrap().all_requirements_met());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod report;
pub mod requirements;
pub mod shell;
pub mod ui;
pub mod view;

pub use error::{GateError, Result};
