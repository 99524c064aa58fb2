//! Replays recorded command runs from a cassette.

use super::format::{Cassette, RecordedRun};
use crate::ports::shell::ShellOutput;

/// Replays command runs from a loaded cassette, serving them in recording
/// order.
pub struct CassetteReplayer {
    runs: Vec<RecordedRun>,
    cursor: usize,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        Self { runs: cassette.runs.clone(), cursor: 0 }
    }

    /// Return the output of the next recorded run, checking that `command`
    /// matches what was recorded at this position.
    ///
    /// # Panics
    ///
    /// Panics if every recorded run has already been consumed, or if
    /// `command` differs from the recorded command at the current position,
    /// showing what was requested versus what the cassette holds.
    pub fn next_run(&mut self, command: &str) -> &ShellOutput {
        assert!(
            self.cursor < self.runs.len(),
            "Cassette exhausted: all {count} recorded runs have been consumed; \
             requested command {command:?}",
            count = self.runs.len(),
        );
        let run = &self.runs[self.cursor];
        assert!(
            run.command == command,
            "Cassette mismatch at seq={seq}: recorded command {recorded:?}, requested {command:?}",
            seq = run.seq,
            recorded = run.command,
        );
        self.cursor += 1;
        &run.output
    }
}

#[cfg(test)]
mod tests {
    use super::CassetteReplayer;
    use crate::cassette::format::{Cassette, RecordedRun};
    use crate::ports::shell::ShellOutput;
    use chrono::Utc;

    fn make_cassette(runs: Vec<RecordedRun>) -> Cassette {
        Cassette { name: "test".into(), recorded_at: Utc::now(), runs }
    }

    fn run(seq: u64, command: &str, stdout: &str) -> RecordedRun {
        RecordedRun {
            seq,
            command: command.into(),
            output: ShellOutput {
                exit_status: Some(0),
                stdout: stdout.into(),
                stderr: String::new(),
            },
        }
    }

    #[test]
    fn replays_runs_in_recording_order() {
        let cassette = make_cassette(vec![
            run(0, "echo a", "a\n"),
            run(1, "echo b", "b\n"),
        ]);
        let mut replayer = CassetteReplayer::new(&cassette);

        assert_eq!(replayer.next_run("echo a").stdout, "a\n");
        assert_eq!(replayer.next_run("echo b").stdout, "b\n");
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_replayer_panics_with_descriptive_message() {
        let cassette = make_cassette(vec![run(0, "echo a", "a\n")]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_run("echo a"); // consumes the only one
        let _ = replayer.next_run("echo a"); // should panic
    }

    #[test]
    #[should_panic(expected = "Cassette mismatch")]
    fn mismatched_command_panics() {
        let cassette = make_cassette(vec![run(0, "echo a", "a\n")]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_run("echo b");
    }
}
