//! External command execution for hooks.
//! A `CommandRunner` is bound to the freshly created project directory and
//! distinguishes "the command ran and failed" from "the command could not be
//! spawned at all", so callers can react to each case.

use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Captured result of a successfully finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external commands in a fixed working directory.
///
/// By default the child process inherits the terminal, so interactive
/// installers behave normally; captured stdout/stderr are empty in that mode.
/// With [`CommandRunner::captured`] the streams are piped and collected
/// instead.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    working_dir: PathBuf,
    inherit_io: bool,
}

impl CommandRunner {
    /// Creates a runner bound to `working_dir` that inherits terminal I/O.
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Self {
        Self { working_dir: working_dir.as_ref().to_path_buf(), inherit_io: true }
    }

    /// Creates a runner that pipes and captures stdout/stderr.
    pub fn captured<P: AsRef<Path>>(working_dir: P) -> Self {
        Self { working_dir: working_dir.as_ref().to_path_buf(), inherit_io: false }
    }

    /// The directory commands are executed in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Executes `command` with `args` and waits for it to finish.
    ///
    /// # Errors
    /// * `Error::CommandSpawnError` if the process could not be started
    ///   (e.g. the executable does not exist)
    /// * `Error::CommandFailed` if the process exited with a non-zero status;
    ///   the error carries the exit code and any captured output
    pub fn run(&self, command: &str, args: &[&str]) -> Result<CommandOutput> {
        debug!("Running '{} {}' in {}", command, args.join(" "), self.working_dir.display());

        let mut cmd = Command::new(command);
        cmd.args(args).current_dir(&self.working_dir);

        if self.inherit_io {
            cmd.stdin(Stdio::inherit()).stdout(Stdio::inherit()).stderr(Stdio::inherit());
        } else {
            cmd.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
        }

        let output = cmd.output().map_err(|source| Error::CommandSpawnError {
            command: command.to_string(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        // A missing code means the process was killed by a signal.
        let code = output.status.code().unwrap_or(-1);

        if output.status.success() {
            Ok(CommandOutput { code, stdout, stderr })
        } else {
            Err(Error::CommandFailed { command: command.to_string(), code, stdout, stderr })
        }
    }
}
