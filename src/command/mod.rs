//! Whole-command assembly on top of the argument list and filter set.

/// Typed `ffmpeg` command builder.
pub mod ffmpeg;
/// JSON command descriptions.
pub mod spec;
