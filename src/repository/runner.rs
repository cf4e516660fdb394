use std::process::{Command, Stdio};
use std::time::Instant;

use super::VcsError;

/// Captured result of one finished svn invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Successful run with the given stdout
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// Failed run with exit code 1 and the given stderr
    pub fn failed(stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            success: false,
            code: Some(1),
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }
}

/// Runs the version-control client and captures its output.
///
/// Implementations block until the process exits and all output is drained.
/// Nothing is ever written to stdin.
pub trait CommandRunner {
    fn run(&self, args: &[String]) -> Result<CommandOutput, VcsError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, args: &[String]) -> Result<CommandOutput, VcsError> {
        (**self).run(args)
    }
}

/// Spawns the real `svn` binary
#[derive(Debug, Clone)]
pub struct SvnProcess {
    program: String,
}

impl SvnProcess {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl CommandRunner for SvnProcess {
    fn run(&self, args: &[String]) -> Result<CommandOutput, VcsError> {
        let started = Instant::now();
        let output = Command::new(&self.program)
            .args(args)
            .arg("--non-interactive")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| VcsError::Launch {
                program: self.program.clone(),
                source,
            })?;

        tracing::debug!(
            program = %self.program,
            ?args,
            status = ?output.status.code(),
            bytes = output.stdout.len(),
            elapsed = ?started.elapsed(),
            "svn finished"
        );

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
