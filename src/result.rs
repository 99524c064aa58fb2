//! Accumulated result of one or more command executions.

/// Result of one or more command executions.
///
/// Stdout and stderr are parallel vectors with one entry per command
/// attempted, in invocation order. `status` reflects the most recently
/// added command (`None` meaning that command could not be found), while
/// `failed_index` marks the first failure seen and is never cleared by a
/// later addition. Commands that were never attempted leave no entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    stdout: Vec<String>,
    stderr: Vec<String>,
    status: Option<i32>,
    failed_index: Option<usize>,
}

impl Default for ExecResult {
    fn default() -> Self {
        Self { stdout: Vec::new(), stderr: Vec::new(), status: Some(0), failed_index: None }
    }
}

impl ExecResult {
    /// Creates an empty result with a successful status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured stdout of each command, in invocation order.
    #[must_use]
    pub fn stdout(&self) -> &[String] {
        &self.stdout
    }

    /// Captured stderr of each command, parallel to [`ExecResult::stdout`].
    #[must_use]
    pub fn stderr(&self) -> &[String] {
        &self.stderr
    }

    /// Exit status of the most recently added command: `Some(0)` when every
    /// command succeeded (or none ran at all), `None` when the command
    /// could not be located or launched.
    #[must_use]
    pub fn status(&self) -> Option<i32> {
        self.status
    }

    /// Index of the first command that failed.
    #[must_use]
    pub fn failed_index(&self) -> Option<usize> {
        self.failed_index
    }

    /// True if a command has failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.status != Some(0)
    }

    /// Standard error of the first command that failed.
    #[must_use]
    pub fn fail_message(&self) -> Option<&str> {
        self.failed_index.map(|index| self.stderr[index].as_str())
    }

    /// Appends one command's captured output and exit status.
    ///
    /// `status` is `None` when the command could not be found. The running
    /// status always reflects the most recent addition; `failed_index` is
    /// set at the first non-success and kept thereafter.
    pub fn add(&mut self, stdout: impl Into<String>, stderr: impl Into<String>, status: Option<i32>) {
        self.stdout.push(stdout.into());
        self.stderr.push(stderr.into());
        self.status = status;
        if status != Some(0) && self.failed_index.is_none() {
            self.failed_index = Some(self.stdout.len() - 1);
        }
    }

    /// Folds another result into this one by replaying its additions in
    /// order.
    ///
    /// Each entry of `other` is re-added with its per-command status: the
    /// entry at `other.failed_index()` carries `other.status()`, every
    /// other entry succeeded by construction.
    pub fn merge(&mut self, other: &ExecResult) {
        for (index, (stdout, stderr)) in other.stdout.iter().zip(&other.stderr).enumerate() {
            let status = if other.failed_index == Some(index) { other.status } else { Some(0) };
            self.add(stdout.clone(), stderr.clone(), status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExecResult;

    #[test]
    fn new_result_is_successful_and_empty() {
        let result = ExecResult::new();
        assert!(!result.failed());
        assert_eq!(result.status(), Some(0));
        assert_eq!(result.failed_index(), None);
        assert_eq!(result.fail_message(), None);
        assert!(result.stdout().is_empty());
        assert!(result.stderr().is_empty());
    }

    #[test]
    fn successful_adds_keep_status_zero() {
        let mut result = ExecResult::new();
        result.add("one", "", Some(0));
        result.add("two", "", Some(0));
        assert!(!result.failed());
        assert_eq!(result.stdout(), ["one", "two"]);
        assert_eq!(result.stderr(), ["", ""]);
        assert_eq!(result.failed_index(), None);
    }

    #[test]
    fn nonzero_status_marks_failure() {
        let mut result = ExecResult::new();
        result.add("", "", Some(0));
        result.add("", "boom", Some(2));
        assert!(result.failed());
        assert_eq!(result.status(), Some(2));
        assert_eq!(result.failed_index(), Some(1));
        assert_eq!(result.fail_message(), Some("boom"));
    }

    #[test]
    fn absent_status_marks_failure() {
        let mut result = ExecResult::new();
        result.add("", "", None);
        assert!(result.failed());
        assert_eq!(result.status(), None);
        assert_eq!(result.failed_index(), Some(0));
    }

    #[test]
    fn status_tracks_latest_add_while_failed_index_keeps_first_failure() {
        let mut result = ExecResult::new();
        result.add("", "first", Some(1));
        result.add("", "", Some(0));
        assert_eq!(result.status(), Some(0));
        assert_eq!(result.failed_index(), Some(0));
        assert_eq!(result.fail_message(), Some("first"));
    }

    #[test]
    fn merge_replays_additions_in_order() {
        let mut first = ExecResult::new();
        first.add("a", "", Some(0));
        first.add("b", "", Some(0));

        let mut second = ExecResult::new();
        second.add("c", "", Some(0));
        second.add("", "broken", Some(3));

        let mut aggregate = ExecResult::new();
        aggregate.merge(&first);
        aggregate.merge(&second);

        assert_eq!(aggregate.stdout(), ["a", "b", "c", ""]);
        assert_eq!(aggregate.status(), Some(3));
        assert_eq!(aggregate.failed_index(), Some(3));
        assert_eq!(aggregate.fail_message(), Some("broken"));
    }

    #[test]
    fn merge_keeps_the_earliest_failure_position() {
        let mut failed = ExecResult::new();
        failed.add("", "not found", None);

        let mut later = ExecResult::new();
        later.add("ok", "", Some(0));

        let mut aggregate = ExecResult::new();
        aggregate.merge(&failed);
        aggregate.merge(&later);

        assert_eq!(aggregate.failed_index(), Some(0));
        assert_eq!(aggregate.fail_message(), Some("not found"));
    }

    #[test]
    fn accessors_are_idempotent() {
        let mut result = ExecResult::new();
        result.add("", "oops", Some(1));
        assert_eq!(result.failed(), result.failed());
        assert_eq!(result.fail_message(), result.fail_message());
    }
}
