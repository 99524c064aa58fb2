//! Guarded shell command execution with aggregated results.
//!
//! A [`Runner`] executes one or more shell command lines, capturing stdout
//! and stderr per command and tracking the exit status and the index of the
//! first failure. Callers choose between fail-fast semantics (the default:
//! the first failing command aborts the sequence with an error) and silent
//! semantics (failures are recorded in the [`ExecResult`] for later
//! inspection). A [`Runner::guard`] block aggregates the results of several
//! `execute` calls into one combined result.
//!
//! Process invocation is a port ([`ports::shell::ShellExecutor`]) with live,
//! recording, and replaying adapters; recorded cassettes make
//! command-execution flows deterministic in tests.
//!
//! ```
//! use shellguard::{ExecOptions, Runner};
//!
//! # fn main() -> Result<(), shellguard::ExecError> {
//! let mut runner = Runner::new();
//!
//! let result = runner.execute("echo hello")?;
//! assert_eq!(result.stdout(), ["hello"]);
//!
//! let result = runner.execute_with("ls /definitely/missing/path", ExecOptions::silent())?;
//! assert!(result.failed());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cassette;
pub mod error;
pub mod options;
pub mod ports;
pub mod result;
pub mod runner;

pub use error::ExecError;
pub use options::{ExecOptions, OnError};
pub use result::ExecResult;
pub use runner::{IntoCommands, Runner};
