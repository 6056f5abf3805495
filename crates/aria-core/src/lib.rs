//! Session memory lifecycle for the aria assistant.
//!
//! This crate owns the one piece of domain logic in the workspace:
//! loading a user's prior memories before a session starts, seeding
//! them into the agent's context, and selectively persisting new
//! conversation turns when the session ends. The live session itself
//! belongs to an external agent runtime reached through the
//! [`AgentRuntime`] trait.

mod controller;
mod error;
mod extract;
pub mod instructions;
mod runtime;
mod seed;

/// Session lifecycle controller and commit hook.
pub use controller::{CommitHook, SessionController, SessionState};
/// Core error type.
pub use error::AriaCoreError;
/// Shutdown batch extraction.
pub use extract::build_batch;
/// Agent runtime collaborator interfaces.
pub use runtime::{AgentRuntime, ShutdownHook};
/// Seed context and record serialization.
pub use seed::{SeedContext, serialize_records};
