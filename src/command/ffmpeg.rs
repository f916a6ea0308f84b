use std::path::Path;

use crate::{
    args::list::{Argument, ArgumentList},
    foundation::error::FfgraphResult,
    foundation::escape::label,
    graph::set::FilterSet,
    value::constants::{AudioCodec, LogLevel, PixelFormat, Preset, VideoCodec},
    value::normalize::Value,
};

/// Default program name for [`FfmpegCommand::to_command_line`].
pub const FFMPEG: &str = "ffmpeg";

/// Typed builder over an [`ArgumentList`] for one `ffmpeg` invocation.
///
/// Options land in the order they are first set; the output target is always last.
#[derive(Clone, Debug, Default)]
pub struct FfmpegCommand {
    args: ArgumentList,
    output: Option<String>,
}

impl FfmpegCommand {
    pub fn new() -> Self {
        Self::default()
    }

    fn unique(mut self, key: &'static str, value: Option<Value>) -> Self {
        self.args.put_argument(Argument::known(key, value), true);
        self
    }

    fn repeated(mut self, key: &'static str, value: Value) -> Self {
        self.args.put_argument(Argument::known(key, Some(value)), false);
        self
    }

    /// `-y`: overwrite the output without asking.
    pub fn overwrite(mut self) -> Self {
        self.args.remove("-n");
        self.unique("-y", None)
    }

    /// `-n`: never overwrite the output.
    pub fn no_overwrite(mut self) -> Self {
        self.args.remove("-y");
        self.unique("-n", None)
    }

    pub fn hide_banner(self) -> Self {
        self.unique("-hide_banner", None)
    }

    /// `-loglevel <level>`.
    pub fn log_level(self, level: LogLevel) -> Self {
        self.unique("-loglevel", Some(level.into()))
    }

    pub fn seek(self, secs: impl Into<Value>) -> Self {
        self.unique("-ss", Some(secs.into()))
    }

    /// `-i <path>`; repeatable.
    pub fn input(self, path: impl AsRef<Path>) -> Self {
        self.repeated("-i", Value::from(path.as_ref()))
    }

    pub fn duration(self, secs: impl Into<Value>) -> Self {
        self.unique("-t", Some(secs.into()))
    }

    pub fn frame_rate(self, fps: impl Into<Value>) -> Self {
        self.unique("-r", Some(fps.into()))
    }

    pub fn video_codec(self, codec: VideoCodec) -> Self {
        self.unique("-c:v", Some(codec.into()))
    }

    pub fn audio_codec(self, codec: AudioCodec) -> Self {
        self.unique("-c:a", Some(codec.into()))
    }

    /// `-b:v <rate>`, e.g. `"4M"` or `4_000_000`.
    pub fn video_bitrate(self, rate: impl Into<Value>) -> Self {
        self.unique("-b:v", Some(rate.into()))
    }

    pub fn crf(self, quality: impl Into<Value>) -> Self {
        self.unique("-crf", Some(quality.into()))
    }

    pub fn preset(self, preset: Preset) -> Self {
        self.unique("-preset", Some(preset.into()))
    }

    pub fn pixel_format(self, format: PixelFormat) -> Self {
        self.unique("-pix_fmt", Some(format.into()))
    }

    /// `-an`: drop audio.
    pub fn no_audio(self) -> Self {
        self.unique("-an", None)
    }

    /// `-map [label]` for a filtergraph output; repeatable.
    pub fn map_label(self, output: &str) -> Self {
        self.repeated("-map", Value::Text(label(output)))
    }

    /// `-map <spec>` for an input stream specifier such as `0:a`; repeatable.
    pub fn map(self, spec: &str) -> Self {
        self.repeated("-map", Value::from(spec))
    }

    /// `-metadata key=value`; repeatable. Shown quoted by [`FfmpegCommand::to_command_line`].
    pub fn metadata(mut self, key: &str, value: &str) -> Self {
        let arg = Argument::known("-metadata", Some(Value::Text(format!("{key}={value}"))));
        self.args.put_argument(arg.quoted(), false);
        self
    }

    /// Carry `filters` under its option (`-vf`, `-filter_complex`, ...).
    pub fn filters(mut self, filters: &FilterSet) -> FfgraphResult<Self> {
        filters.apply_to(&mut self.args)?;
        Ok(self)
    }

    /// Any other option. `key` includes its leading dash.
    pub fn option(
        mut self,
        key: impl Into<String>,
        value: Option<Value>,
        unique: bool,
    ) -> FfgraphResult<Self> {
        self.args.put(key, value, unique)?;
        Ok(self)
    }

    /// Insert a prebuilt argument, e.g. a quoted one.
    pub fn argument(mut self, arg: Argument, unique: bool) -> Self {
        self.args.put_argument(arg, unique);
        self
    }

    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().display().to_string());
        self
    }

    /// Options set so far, without the output target.
    pub fn args(&self) -> &ArgumentList {
        &self.args
    }

    /// Process arguments to pass after the program name. Quoted values are passed raw.
    pub fn to_args(&self) -> Vec<String> {
        self.with_output().argv(Vec::<String>::new())
    }

    /// Display form for logs and shell copy-paste: program name first, quoted values
    /// wrapped in `"`.
    pub fn to_command_line(&self) -> Vec<String> {
        self.with_output().render([FFMPEG])
    }

    fn with_output(&self) -> ArgumentList {
        let mut args = self.args.clone();
        if let Some(output) = &self.output {
            args.put_argument(
                Argument::known(ArgumentList::OUTPUT, Some(Value::Text(output.clone()))),
                true,
            );
        }
        args
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/ffmpeg.rs"]
mod tests;
