//! The requirement flow engine.
//!
//! - [`controller`] - The state machine that owns answers and the current step
//! - [`state`] - Flow state, phases and transitions
//! - [`driver`] - Prompting a flow to completion through a [`UserInterface`](crate::ui::UserInterface)

pub mod controller;
pub mod driver;
pub mod state;

pub use controller::FlowController;
pub use driver::{apply_intent, FlowDriver, FlowOutcome, START_KEY};
pub use state::{CurrentStep, FlowPhase, FlowState, Transition};
