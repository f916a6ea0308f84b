use std::path::Path;

use serde::Deserialize;

use crate::{
    args::list::{Argument, ArgumentList},
    exec::runner::Executor,
    foundation::error::{FfgraphError, FfgraphResult},
    value::normalize::Value,
};

/// One stream record from `ffprobe -show_streams`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProbeStream {
    #[serde(default)]
    pub index: u32,
    /// `video`, `audio`, `subtitle`, ...
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub pix_fmt: Option<String>,
    /// Real base frame rate as `num/den`.
    pub r_frame_rate: Option<String>,
    pub sample_rate: Option<String>,
    pub channels: Option<u32>,
    pub duration: Option<String>,
}

impl ProbeStream {
    /// Frame rate as a `(num, den)` pair.
    pub fn frame_rate(&self) -> Option<(u32, u32)> {
        self.r_frame_rate.as_deref().and_then(parse_ratio)
    }
}

/// Container record from `ffprobe -show_format`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProbeFormat {
    pub format_name: Option<String>,
    pub duration: Option<String>,
    pub bit_rate: Option<String>,
}

/// Parsed `ffprobe -print_format json` output.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProbeReport {
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
    pub format: Option<ProbeFormat>,
}

impl ProbeReport {
    /// Deserialize ffprobe JSON output.
    pub fn from_json(text: &str) -> FfgraphResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| FfgraphError::serde(format!("ffprobe json parse failed: {e}")))
    }

    pub fn video_stream(&self) -> Option<&ProbeStream> {
        self.stream_of_type("video")
    }

    pub fn audio_stream(&self) -> Option<&ProbeStream> {
        self.stream_of_type("audio")
    }

    fn stream_of_type(&self, codec_type: &str) -> Option<&ProbeStream> {
        self.streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some(codec_type))
    }

    /// Container duration in seconds, `0.0` when unknown.
    pub fn duration_sec(&self) -> f64 {
        self.format
            .as_ref()
            .and_then(|f| f.duration.as_ref())
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

/// Parse an ffmpeg rational such as `30000/1001`. Zero denominators are rejected.
pub fn parse_ratio(s: &str) -> Option<(u32, u32)> {
    let (num, den) = s.split_once('/')?;
    let num = num.trim().parse::<u32>().ok()?;
    let den = den.trim().parse::<u32>().ok()?;
    if den == 0 {
        return None;
    }
    Some((num, den))
}

/// ffprobe arguments for a JSON stream/format report of `path`.
pub fn probe_args(path: &Path) -> Vec<String> {
    let mut args = ArgumentList::new();
    args.put_argument(Argument::known("-v", Some(Value::Text("error".into()))), true);
    args.put_argument(
        Argument::known("-print_format", Some(Value::Text("json".into()))),
        true,
    );
    args.put_argument(Argument::known("-show_streams", None), true);
    args.put_argument(Argument::known("-show_format", None), true);
    args.put_argument(
        Argument::known(ArgumentList::OUTPUT, Some(Value::from(path))),
        true,
    );
    args.argv(Vec::<String>::new())
}

/// Probe `path` through `executor` (expected to run `ffprobe`).
pub fn probe(executor: &impl Executor, path: &Path) -> FfgraphResult<ProbeReport> {
    let out = executor.execute(&probe_args(path))?;
    ProbeReport::from_json(&out.stdout)
}

#[cfg(test)]
#[path = "../../tests/unit/exec/probe.rs"]
mod tests;
