//! Error types for buildgate operations.
//!
//! This module defines [`GateError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Construction errors are raised once, when a requirement set is built
//! - Flow precondition errors are explicit rejections that leave the flow
//!   state untouched, so any operation is safe to call
//! - Use `anyhow::Error` (via `GateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for buildgate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// A requirement set must contain at least one requirement.
    #[error("Requirement set is empty")]
    EmptyRequirementSet,

    /// Two requirements in the same set share an id.
    #[error("Duplicate requirement id: {id}")]
    DuplicateRequirementId { id: String },

    /// A requirement definition is malformed.
    #[error("Invalid requirement: {message}")]
    InvalidRequirement { message: String },

    /// `advance` was called before the current step was answered.
    #[error("Requirement '{id}' has not been answered yet")]
    StepUnanswered { id: String },

    /// `retreat` was called on the first step.
    #[error("Already at the first requirement")]
    AtFirstStep,

    /// The flow has already delivered its answers.
    #[error("Requirement flow is already complete")]
    FlowCompleted,

    /// An answer was recorded for a requirement that is not displayed.
    #[error("Cannot answer '{actual}' while '{expected}' is the current requirement")]
    StepMismatch { expected: String, actual: String },

    /// Free text was given for a requirement that does not accept it.
    #[error("Requirement '{id}' does not accept a custom answer")]
    CustomInputNotAllowed { id: String },

    /// A prompt produced a value that is not one of its options.
    #[error("Invalid answer '{value}' for '{key}'")]
    InvalidAnswer { key: String, value: String },

    /// A prompt needs an answer but nobody can give one.
    #[error("Cannot prompt for '{key}' in non-interactive mode (set {env_var})")]
    NoAnswerAvailable { key: String, env_var: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Build command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for buildgate operations.
pub type Result<T> = std::result::Result<T, GateError>;
