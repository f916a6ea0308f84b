use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    args::list::Argument,
    command::ffmpeg::FfmpegCommand,
    filter::node::FilterNode,
    foundation::error::{FfgraphError, FfgraphResult},
    graph::chain::Chain,
    graph::set::{FilterOption, FilterSet},
    value::alias::Alias,
    value::constants::LogLevel,
    value::normalize::Value,
};

/// JSON description of one `ffmpeg` invocation.
///
/// ```json
/// {
///   "overwrite": true,
///   "inputs": ["in.mp4"],
///   "filters": {
///     "option": "filter_complex",
///     "graphs": [
///       { "nodes": [{ "filter": "movie", "args": ["logo.png"] }], "output": "wm" },
///       { "inputs": ["0:v", "wm"], "nodes": ["overlay=10:10"], "output": "out" }
///     ]
///   },
///   "maps": ["[out]"],
///   "options": [{ "key": "-c:v", "value": "libx264" }],
///   "output": "out.mp4"
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSpec {
    #[serde(default)]
    pub overwrite: bool,
    /// `-loglevel` token, e.g. `error`.
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Filtergraph carried by the command.
    #[serde(default)]
    pub filters: Option<FilterSetSpec>,
    #[serde(default)]
    pub maps: Vec<String>,
    #[serde(default)]
    pub options: Vec<OptionSpec>,
    pub output: Option<String>,
}

/// One free-form command-line option.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionSpec {
    /// Option key including its leading dash.
    pub key: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    /// Replace an earlier option with the same key instead of repeating it.
    #[serde(default = "default_true")]
    pub unique: bool,
    /// Wrap the value in double quotes.
    #[serde(default)]
    pub quoted: bool,
}

fn default_true() -> bool {
    true
}

/// JSON form of a [`FilterSet`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSetSpec {
    /// `vf`, `af`, `filter_complex`, or any other option name.
    #[serde(default = "default_option")]
    pub option: String,
    /// Labels of a leading split statement.
    #[serde(default)]
    pub split: Option<Vec<String>>,
    #[serde(default)]
    pub graphs: Vec<GraphSpec>,
}

fn default_option() -> String {
    FilterOption::Complex.name().to_string()
}

/// JSON form of one graph statement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSpec {
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub output: Option<String>,
}

/// A chain node: either literal expression text or a structured node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    /// Expression used verbatim, e.g. `"scale=1280:720"`.
    Raw(String),
    /// Node built through the serializer.
    Node {
        filter: String,
        #[serde(default)]
        args: Vec<serde_json::Value>,
        #[serde(default)]
        named: Vec<NamedArgSpec>,
        #[serde(default)]
        separator: Option<String>,
    },
}

/// One named node argument.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedArgSpec {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl CommandSpec {
    /// Parse a command description from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FfgraphResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FfgraphError::serde(format!("parse command JSON: {e}")))
    }

    pub fn from_json(text: &str) -> FfgraphResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| FfgraphError::serde(format!("parse command JSON: {e}")))
    }

    /// Parse a command description from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FfgraphResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FfgraphError::validation(format!("open command JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// The filter set described by `filters`, if any.
    pub fn filter_set(&self) -> FfgraphResult<Option<FilterSet>> {
        self.filters.as_ref().map(FilterSetSpec::build).transpose()
    }

    /// Build the command. Values pass through the normalizer exactly as builder calls do.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn build(&self) -> FfgraphResult<FfmpegCommand> {
        let mut cmd = FfmpegCommand::new();
        if self.overwrite {
            cmd = cmd.overwrite();
        }
        if let Some(level) = &self.log_level {
            let level = LogLevel::from_command(level).ok_or_else(|| {
                FfgraphError::validation(format!("unknown log level '{level}'"))
            })?;
            cmd = cmd.log_level(level);
        }
        for input in &self.inputs {
            cmd = cmd.input(input);
        }
        if let Some(filters) = self.filter_set()? {
            cmd = cmd.filters(&filters)?;
        }
        for spec in &self.maps {
            cmd = cmd.map(spec);
        }
        for opt in &self.options {
            let value = opt.value.as_ref().map(json_value).transpose()?;
            if opt.quoted {
                let arg = Argument::new(opt.key.as_str(), value)?.quoted();
                cmd = cmd.argument(arg, opt.unique);
            } else {
                cmd = cmd.option(opt.key.as_str(), value, opt.unique)?;
            }
        }
        if let Some(output) = &self.output {
            cmd = cmd.output(output);
        }
        tracing::debug!(
            inputs = self.inputs.len(),
            args = cmd.args().len(),
            "built command from spec"
        );
        Ok(cmd)
    }
}

impl FilterSetSpec {
    pub fn build(&self) -> FfgraphResult<FilterSet> {
        let mut set = FilterSet::new(FilterOption::from_name(&self.option));
        if let Some(split) = &self.split {
            set = set.with_split(split.iter().cloned());
        }
        for graph in &self.graphs {
            set = set.add_graph(graph.build()?);
        }
        Ok(set)
    }
}

impl GraphSpec {
    pub fn build(&self) -> FfgraphResult<Chain> {
        let mut chain = Chain::new().with_inputs(self.inputs.iter().cloned());
        for node in &self.nodes {
            chain = chain.append(node.build()?);
        }
        if let Some(output) = &self.output {
            chain = chain.with_output(output.as_str());
        }
        Ok(chain)
    }
}

impl NodeSpec {
    pub fn build(&self) -> FfgraphResult<String> {
        match self {
            Self::Raw(expr) => Ok(expr.clone()),
            Self::Node {
                filter,
                args,
                named,
                separator,
            } => {
                if filter.is_empty() {
                    return Err(FfgraphError::validation("node filter name must be non-empty"));
                }
                let mut node = FilterNode::new(filter.as_str());
                if let Some(sep) = separator {
                    node = node.with_separator(sep.as_str());
                }
                for arg in args {
                    node.add_positional([json_value(arg)?]);
                }
                for arg in named {
                    match &arg.value {
                        Some(v) => node.add_named(arg.name.as_str(), [json_value(v)?]),
                        None => node.add_named(arg.name.as_str(), std::iter::empty::<Value>()),
                    };
                }
                Ok(node.into_expr())
            }
        }
    }
}

/// Convert a JSON scalar into an option value.
pub fn json_value(v: &serde_json::Value) -> FfgraphResult<Value> {
    match v {
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::UInt(u))
            } else {
                n.as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| FfgraphError::validation(format!("unsupported number {n}")))
            }
        }
        other => Err(FfgraphError::validation(format!(
            "option values must be scalars, got {other}"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/spec.rs"]
mod tests;
