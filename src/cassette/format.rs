//! Cassette data structures for recording and replaying command runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::shell::ShellOutput;

/// A single recorded shell command invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordedRun {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// The command line that was executed.
    pub command: String,
    /// The captured output of the command.
    pub output: ShellOutput,
}

/// A cassette containing an ordered sequence of recorded command runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Ordered list of recorded runs.
    pub runs: Vec<RecordedRun>,
}

#[cfg(test)]
mod tests {
    use super::{Cassette, RecordedRun};
    use crate::ports::shell::ShellOutput;
    use chrono::Utc;

    fn sample_cassette() -> Cassette {
        Cassette {
            name: "test-cassette".into(),
            recorded_at: Utc::now(),
            runs: vec![
                RecordedRun {
                    seq: 0,
                    command: "echo hello".into(),
                    output: ShellOutput {
                        exit_status: Some(0),
                        stdout: "hello\n".into(),
                        stderr: String::new(),
                    },
                },
                RecordedRun {
                    seq: 1,
                    command: "/not/a/real/binary".into(),
                    output: ShellOutput {
                        exit_status: None,
                        stdout: String::new(),
                        stderr: "sh: /not/a/real/binary: not found\n".into(),
                    },
                },
            ],
        }
    }

    #[test]
    fn yaml_round_trip() {
        let cassette = sample_cassette();
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        let deserialized: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(cassette, deserialized);
    }

    #[test]
    fn absent_exit_status_survives_serialization() {
        let cassette = sample_cassette();
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        let deserialized: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(deserialized.runs[1].output.exit_status, None);
    }
}
