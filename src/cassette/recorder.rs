//! Records command runs into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, RecordedRun};
use crate::ports::shell::ShellOutput;

/// Records command runs and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    runs: Vec<RecordedRun>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), runs: Vec::new(), next_seq: 0 }
    }

    /// Record one command run. The `seq` field is assigned automatically.
    pub fn record(&mut self, command: impl Into<String>, output: ShellOutput) {
        let run = RecordedRun { seq: self.next_seq, command: command.into(), output };
        self.next_seq += 1;
        self.runs.push(run);
    }

    /// Write the cassette YAML file to disk, draining the runs recorded so
    /// far. Takes `&mut self` so a recorder shared behind `Arc<Mutex<_>>`
    /// can still be flushed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(&mut self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name.clone(),
            recorded_at: Utc::now(),
            runs: std::mem::take(&mut self.runs),
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        Ok(self.path.clone())
    }
}
