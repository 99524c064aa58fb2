//! Shell executor port for running external commands.

use serde::{Deserialize, Serialize};

/// The captured output of one shell command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// Exit code of the process, or `None` when the command could not be
    /// located or launched.
    pub exit_status: Option<i32>,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

/// Executes shell commands.
///
/// Abstracting shell execution keeps the spawning primitive out of the
/// runner and allows deterministic replay of command outputs from recorded
/// cassettes.
pub trait ShellExecutor: Send + Sync {
    /// Runs a command string in the system shell, blocking until the
    /// process exits, and returns its captured output.
    ///
    /// A command that cannot be located or launched is reported in-band
    /// with `exit_status: None`, not as an error.
    fn run(&self, command: &str) -> ShellOutput;
}
