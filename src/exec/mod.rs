//! Process-facing collaborators: running the tool and reading its probe output.

/// ffprobe JSON report parsing.
pub mod probe;
/// Executor trait and the system-process implementation.
pub mod runner;
