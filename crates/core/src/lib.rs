//! Domain logic for the two-step vitals measurement workflow.
//!
//! The crate has no HTTP or async dependencies. The API crate owns a single
//! [`workflow::WorkflowController`] and translates its results into
//! redirects and JSON responses.

pub mod error;
pub mod features;
pub mod ingest;
pub mod predictor;
pub mod session;
pub mod state_machine;
pub mod threshold;
pub mod types;
pub mod workflow;
