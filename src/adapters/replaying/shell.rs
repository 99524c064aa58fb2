//! Replaying adapter for the `ShellExecutor` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Replays recorded shell command outputs from a cassette.
///
/// Runs are served in recording order; the underlying replayer panics with
/// a descriptive message when the cassette is exhausted or the requested
/// command does not match the recording.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(&self, command: &str) -> ShellOutput {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_run(command).clone()
    }
}
