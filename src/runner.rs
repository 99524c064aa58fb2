//! Command orchestration: the [`Runner`] and its execute/guard operations.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::shell::LiveShellExecutor;
use crate::adapters::recording::shell::RecordingShellExecutor;
use crate::adapters::replaying::shell::ReplayingShellExecutor;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::ExecError;
use crate::options::{ExecOptions, OnError};
use crate::ports::shell::{ShellExecutor, ShellOutput};
use crate::result::ExecResult;

/// Conversion into an ordered sequence of command strings.
///
/// Lets [`Runner::execute`] accept a single command line or a sequence of
/// them.
pub trait IntoCommands {
    /// Returns the commands to run, in order.
    fn into_commands(self) -> Vec<String>;
}

impl IntoCommands for &str {
    fn into_commands(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoCommands for String {
    fn into_commands(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoCommands for &String {
    fn into_commands(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoCommands for Vec<String> {
    fn into_commands(self) -> Vec<String> {
        self
    }
}

impl IntoCommands for Vec<&str> {
    fn into_commands(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoCommands for &[&str] {
    fn into_commands(self) -> Vec<String> {
        self.iter().map(|command| (*command).to_string()).collect()
    }
}

impl<const N: usize> IntoCommands for [&str; N] {
    fn into_commands(self) -> Vec<String> {
        self.as_slice().into_commands()
    }
}

/// Runs shell commands and applies the error policy.
///
/// A `Runner` owns the shell-execution port plus the guard aggregate for
/// the current scope, so execution state is explicit rather than shared:
/// `&mut self` serializes every `execute`/`guard` on this runner.
/// Constructors wire up different adapters (live, recording, replaying).
pub struct Runner {
    shell: Box<dyn ShellExecutor>,
    defaults: ExecOptions,
    guard: Option<ExecResult>,
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("defaults", &self.defaults)
            .field("guard", &self.guard)
            .field("recording", &self.recorder.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    /// Creates a runner executing commands through the live system shell.
    #[must_use]
    pub fn new() -> Self {
        Self::with_shell(Box::new(LiveShellExecutor))
    }

    /// Creates a runner over an arbitrary shell executor.
    #[must_use]
    pub fn with_shell(shell: Box<dyn ShellExecutor>) -> Self {
        Self { shell, defaults: ExecOptions::default(), guard: None, recorder: None }
    }

    /// Sets the default options used when no per-call options are given.
    #[must_use]
    pub fn with_defaults(mut self, defaults: ExecOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Creates a recording runner: commands run through the live shell and
    /// every invocation is written to a cassette at `path` when the runner
    /// is dropped.
    #[must_use]
    pub fn recording(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, name)));
        let shell =
            RecordingShellExecutor::new(Box::new(LiveShellExecutor), Arc::clone(&recorder));
        Self {
            shell: Box::new(shell),
            defaults: ExecOptions::default(),
            guard: None,
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying runner serving command outputs from a cassette
    /// file instead of spawning processes.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        let replayer = CassetteReplayer::new(&cassette);
        Ok(Self::with_shell(Box::new(ReplayingShellExecutor::new(replayer))))
    }

    /// Executes one or more commands with this runner's default options.
    ///
    /// # Errors
    ///
    /// See [`Runner::execute_with`].
    pub fn execute<C: IntoCommands>(&mut self, commands: C) -> Result<ExecResult, ExecError> {
        let options = self.defaults;
        self.execute_with(commands, options)
    }

    /// Executes one or more commands in order, stopping at the first
    /// failure.
    ///
    /// A command fails when it exits non-zero or cannot be found. With
    /// [`OnError::Exception`] the first failure aborts the sequence with an
    /// error; with [`OnError::Silent`] the failure is recorded in the
    /// result and later commands are simply not run. Inside a
    /// [`Runner::guard`] body failures always abort, and every result is
    /// folded into the guard aggregate before returning.
    ///
    /// The returned result holds exactly one stdout/stderr entry per
    /// command attempted, never for commands skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::CommandNotFound`] when a command could not be
    /// located or launched, or [`ExecError::CommandFailed`] carrying the
    /// captured stderr when it exited non-zero.
    pub fn execute_with<C: IntoCommands>(
        &mut self,
        commands: C,
        options: ExecOptions,
    ) -> Result<ExecResult, ExecError> {
        let mut result = ExecResult::new();
        for command in commands.into_commands() {
            let output = self.run_one(&command);
            let exit_status = output.exit_status;
            result.add(output.stdout, output.stderr, exit_status);
            if exit_status == Some(0) {
                continue;
            }
            if options.on_error == OnError::Exception || self.guard.is_some() {
                if let Some(aggregate) = self.guard.as_mut() {
                    aggregate.merge(&result);
                }
                return Err(match exit_status {
                    None => ExecError::CommandNotFound { command },
                    Some(status) => ExecError::CommandFailed {
                        status,
                        stderr: result.fail_message().unwrap_or_default().to_string(),
                    },
                });
            }
            // Silent mode with no guard: keep the result, skip the rest.
            break;
        }
        if let Some(aggregate) = self.guard.as_mut() {
            aggregate.merge(&result);
        }
        Ok(result)
    }

    /// Runs `body` with a fresh guard aggregate, using this runner's
    /// default options.
    ///
    /// # Errors
    ///
    /// See [`Runner::guard_with`].
    pub fn guard<F>(&mut self, body: F) -> Result<ExecResult, ExecError>
    where
        F: FnOnce(&mut Self) -> Result<(), ExecError>,
    {
        let options = self.defaults;
        self.guard_with(options, body)
    }

    /// Runs `body` with a fresh guard aggregate that collects the result of
    /// every `execute` call made inside it.
    ///
    /// The aggregate is always cleared before this method returns. With
    /// [`OnError::Exception`] an error escaping `body` is re-raised to the
    /// caller; with [`OnError::Silent`] it is swallowed and the accumulated
    /// aggregate is returned instead.
    ///
    /// Nested guards are not supported: entering a guard while another is
    /// active discards the outer aggregate.
    ///
    /// # Errors
    ///
    /// Re-raises the first [`ExecError`] escaping `body` when the effective
    /// policy is [`OnError::Exception`].
    pub fn guard_with<F>(&mut self, options: ExecOptions, body: F) -> Result<ExecResult, ExecError>
    where
        F: FnOnce(&mut Self) -> Result<(), ExecError>,
    {
        self.guard = Some(ExecResult::new());
        let outcome = body(self);
        let aggregate = self.guard.take().unwrap_or_default();
        match outcome {
            Ok(()) => Ok(aggregate),
            Err(error) => {
                if options.on_error == OnError::Exception {
                    Err(error)
                } else {
                    Ok(aggregate)
                }
            }
        }
    }

    /// Runs a single command through the port, trimming trailing whitespace
    /// from both captured streams.
    fn run_one(&self, command: &str) -> ShellOutput {
        let raw = self.shell.run(command);
        ShellOutput {
            exit_status: raw.exit_status,
            stdout: raw.stdout.trim_end().to_string(),
            stderr: raw.stderr.trim_end().to_string(),
        }
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        if let Some(recorder) = self.recorder.take() {
            if let Ok(mut recorder) = recorder.lock() {
                if let Err(e) = recorder.finish() {
                    eprintln!("Warning: failed to write cassette: {e}");
                }
            }
        }
    }
}
