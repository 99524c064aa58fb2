//! Error taxonomy for command execution.

/// Errors surfaced by [`Runner::execute`] and [`Runner::guard`].
///
/// The `Display` output of each variant is part of the contract: callers
/// show these messages directly.
///
/// [`Runner::execute`]: crate::runner::Runner::execute
/// [`Runner::guard`]: crate::runner::Runner::guard
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecError {
    /// Unknown option key or illegal option value. Raised before any
    /// command runs and never silenced by the error policy.
    #[error("{0}")]
    InvalidOption(String),

    /// The shell could not locate or launch the command.
    #[error("{command}: command not found")]
    CommandNotFound {
        /// The command line that could not be launched.
        command: String,
    },

    /// The command launched and exited with a non-zero status.
    #[error("{stderr}")]
    CommandFailed {
        /// Exit status reported by the process.
        status: i32,
        /// Captured standard error of the failed command; may be empty.
        stderr: String,
    },
}
