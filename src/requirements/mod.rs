//! Requirement definitions and answers.
//!
//! # Modules
//!
//! - [`definition`] - Requirement definitions and validated requirement sets
//! - [`answer`] - Tagged answers, the answer map, and the aggregate check

pub mod answer;
pub mod definition;

pub use answer::{Answer, AnswerMap, Choice};
pub use definition::{RequirementDefinition, RequirementSet};
