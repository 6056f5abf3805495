//! Test helpers shared across aria crates.

pub mod memory;
pub mod runtime;

pub use memory::StubGateway;
pub use runtime::StubRuntime;
