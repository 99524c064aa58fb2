//! Port traits defining external boundaries.
//!
//! The single external boundary of this crate is process invocation:
//! spawning a shell command line and capturing its output.
//! Implementations live in `src/adapters/`.

pub mod shell;

pub use shell::{ShellExecutor, ShellOutput};
