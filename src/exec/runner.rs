use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::{
    command::ffmpeg::{FFMPEG, FfmpegCommand},
    foundation::error::{FfgraphError, FfgraphResult},
};

/// Captured result of one successful tool invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs a tool with a prepared argument vector.
///
/// This is the only place ffgraph touches processes; builders hand over finished tokens.
pub trait Executor {
    /// Run with `args` (program name excluded). Non-zero exit is an error.
    fn execute(&self, args: &[String]) -> FfgraphResult<ExecOutput>;
}

/// [`Executor`] backed by a binary on the system.
#[derive(Clone, Debug)]
pub struct SystemExecutor {
    program: PathBuf,
}

impl SystemExecutor {
    /// Run `program` (a name looked up on `PATH`, or a path).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The system `ffmpeg`.
    pub fn ffmpeg() -> Self {
        Self::new(FFMPEG)
    }

    /// The system `ffprobe`.
    pub fn ffprobe() -> Self {
        Self::new("ffprobe")
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Executor for SystemExecutor {
    #[tracing::instrument(level = "debug", skip_all)]
    fn execute(&self, args: &[String]) -> FfgraphResult<ExecOutput> {
        tracing::debug!(program = %self.program.display(), ?args, "spawning");
        let out = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                FfgraphError::execution(format!(
                    "failed to spawn {} (is it installed and on PATH?): {e}",
                    self.program.display()
                ))
            })?;

        let result = ExecOutput {
            status: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        };
        if !out.status.success() {
            return Err(FfgraphError::execution(format!(
                "{} exited with status {}: {}",
                self.program.display(),
                out.status,
                result.stderr.trim()
            )));
        }
        tracing::debug!(stdout_len = result.stdout.len(), "finished");
        Ok(result)
    }
}

/// Whether `program -version` runs successfully.
pub fn is_on_path(program: &str) -> bool {
    Command::new(program)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Hand a finished command to `executor`.
pub fn run(executor: &impl Executor, cmd: &FfmpegCommand) -> FfgraphResult<ExecOutput> {
    executor.execute(&cmd.to_args())
}

#[cfg(test)]
#[path = "../../tests/unit/exec/runner.rs"]
mod tests;
