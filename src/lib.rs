//! ffgraph builds ffmpeg command lines and filtergraph expressions.
//!
//! The crate is layered bottom-up:
//!
//! - [`Value`] normalizes numbers, decimals, booleans and enumerated aliases into text
//! - [`FilterNode`] and the typed filters in [`filter::library`] render single filter expressions
//! - [`Chain`] joins nodes into a labeled chain, [`FilterSet`] joins chains into a graph argument
//! - [`ArgumentList`] and [`FfmpegCommand`] assemble the final token vector
//!
//! Nothing here spawns a process except [`SystemExecutor`].
#![forbid(unsafe_code)]

mod foundation;

/// Flat command-line argument lists.
pub mod args;
/// Command builders and their JSON description.
pub mod command;
/// Process execution and probing.
pub mod exec;
/// Filter nodes and the typed filter library.
pub mod filter;
/// Filter chains and filter sets.
pub mod graph;
/// Value normalization and enumerated aliases.
pub mod value;

pub use crate::foundation::error::{FfgraphError, FfgraphResult};
pub use crate::foundation::escape::{escape, label, labels, quote_literal};

pub use crate::args::list::{Argument, ArgumentList};
pub use crate::command::ffmpeg::{FFMPEG, FfmpegCommand};
pub use crate::command::spec::{
    CommandSpec, FilterSetSpec, GraphSpec, NamedArgSpec, NodeSpec, OptionSpec, json_value,
};
pub use crate::exec::probe::{
    ProbeFormat, ProbeReport, ProbeStream, parse_ratio, probe, probe_args,
};
pub use crate::exec::runner::{ExecOutput, Executor, SystemExecutor, is_on_path, run};
pub use crate::filter::library::{
    Concat, Crop, DrawText, Filter, Format, Fps, IntoExpr, Movie, Overlay, Pad, Scale, Setpts,
    Split, Trim, Volume,
};
pub use crate::filter::node::{BaseArgs, DEFAULT_SEPARATOR, FilterArgument, FilterNode, SlotKey};
pub use crate::graph::chain::{Chain, Graph, Stream};
pub use crate::graph::set::{FilterOption, FilterSet};
pub use crate::value::alias::{Alias, AliasTable, resolve_alias};
pub use crate::value::constants::{
    AspectMode, AudioCodec, EofAction, LogLevel, PixelFormat, Preset, ScaleFlags, VideoCodec,
};
pub use crate::value::normalize::{Value, normalize};
