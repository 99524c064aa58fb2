//! Live shell executor using `std::process::Command`.

use std::process::Command;

use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Exit code POSIX shells report for a command that was not found.
const NOT_FOUND_EXIT: i32 = 127;

/// Live shell executor that runs commands via the system shell.
///
/// The command string is interpreted by `sh -c`, so the shell, not the
/// spawn call, discovers missing executables: exit code 127 is reported as
/// the absent status. A command that deliberately exits 127 is
/// indistinguishable from one that was not found. Signal-terminated
/// processes report exit status `-1`.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, command: &str) -> ShellOutput {
        match Command::new("sh").arg("-c").arg(command).output() {
            Ok(output) => {
                let exit_status = match output.status.code() {
                    Some(NOT_FOUND_EXIT) => None,
                    None => Some(-1),
                    code => code,
                };
                ShellOutput {
                    exit_status,
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }
            }
            // The shell itself could not be launched.
            Err(_) => ShellOutput {
                exit_status: None,
                stdout: String::new(),
                stderr: String::new(),
            },
        }
    }
}
