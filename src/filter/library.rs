use rust_decimal::prelude::ToPrimitive;

use crate::{
    foundation::error::{FfgraphError, FfgraphResult},
    foundation::escape::{escape, quote_literal},
    filter::node::FilterNode,
    value::alias::Alias,
    value::constants::{AspectMode, EofAction, PixelFormat, ScaleFlags},
    value::normalize::Value,
};

/// A typed filter backed by a [`FilterNode`].
///
/// Mandatory parameters are registered as base arguments at construction, so a filter
/// built only from its constructor renders positionally (`scale=1280:720`). Optional
/// parameters are added by name.
pub trait Filter: Sized {
    /// Filter name used when the node has no explicit override.
    const FUNCTION: &'static str;

    /// Underlying node.
    fn node(&self) -> &FilterNode;

    /// Underlying node, mutably.
    fn node_mut(&mut self) -> &mut FilterNode;

    /// Unwrap into the underlying node.
    fn into_node(self) -> FilterNode;

    /// Replace the function name, e.g. `scale` -> `scale_cuda`.
    fn with_function(mut self, function: impl Into<String>) -> Self {
        self.node_mut().set_function(function);
        self
    }

    /// Add `name=value`.
    fn arg(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.node_mut().add_named(name, [value]);
        self
    }

    /// Add a bare flag parameter.
    fn flag(mut self, name: &str) -> Self {
        self.node_mut().add_named(name, std::iter::empty::<Value>());
        self
    }

    /// Render the filter expression.
    fn render(self) -> String {
        self.into_node().into_expr()
    }
}

/// Anything that can stand as one node of a filter chain.
pub trait IntoExpr {
    /// Rendered node expression.
    fn into_expr(self) -> String;
}

impl<F: Filter> IntoExpr for F {
    fn into_expr(self) -> String {
        self.render()
    }
}

impl IntoExpr for FilterNode {
    fn into_expr(self) -> String {
        FilterNode::into_expr(self)
    }
}

impl IntoExpr for String {
    fn into_expr(self) -> String {
        self
    }
}

impl IntoExpr for &str {
    fn into_expr(self) -> String {
        self.to_string()
    }
}

macro_rules! filter_type {
    ($(#[$meta:meta])* $name:ident => $function:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            node: FilterNode,
        }

        impl Filter for $name {
            const FUNCTION: &'static str = $function;

            fn node(&self) -> &FilterNode {
                &self.node
            }

            fn node_mut(&mut self) -> &mut FilterNode {
                &mut self.node
            }

            fn into_node(self) -> FilterNode {
                self.node
            }
        }

        impl $name {
            fn empty() -> Self {
                Self {
                    node: FilterNode::new(<Self as Filter>::FUNCTION),
                }
            }
        }
    };
}

filter_type!(
    /// `scale=w:h`.
    Scale => "scale"
);

impl Scale {
    /// Scale to `width` x `height`. Either may be an expression such as `-2` or `iw/2`.
    pub fn new(width: impl Into<Value>, height: impl Into<Value>) -> Self {
        let mut f = Self::empty();
        f.node.add_base("w", width).add_base("h", height);
        f
    }

    pub fn flags(self, flags: ScaleFlags) -> Self {
        self.arg("flags", flags)
    }

    /// Keep the source aspect ratio within the target box.
    pub fn aspect(self, mode: AspectMode) -> Self {
        self.arg("force_original_aspect_ratio", mode)
    }
}

filter_type!(
    /// `overlay=x:y`.
    Overlay => "overlay"
);

impl Overlay {
    /// Place the overlay input at `x`, `y` (expressions allowed).
    pub fn new(x: impl Into<Value>, y: impl Into<Value>) -> Self {
        let mut f = Self::empty();
        f.node.add_base("x", x).add_base("y", y);
        f
    }

    /// Center the overlay over the main input.
    pub fn centered() -> Self {
        Self::new("(main_w-overlay_w)/2", "(main_h-overlay_h)/2")
    }

    /// End when the shortest input ends.
    pub fn shortest(self) -> Self {
        self.arg("shortest", 1)
    }

    /// Behaviour once the overlay input ends.
    pub fn eof_action(self, action: EofAction) -> Self {
        self.arg("eof_action", action)
    }
}

filter_type!(
    /// `movie=path`, a source reading a file into the graph.
    Movie => "movie"
);

impl Movie {
    /// Read `path`. Filtergraph-significant characters are escaped.
    pub fn new(path: &str) -> Self {
        let mut f = Self::empty();
        f.node.add_base("filename", escape(path));
        f
    }

    /// Loop the source `count` times (`0` loops forever).
    pub fn loop_count(self, count: u32) -> Self {
        self.arg("loop", count)
    }

    pub fn stream_index(self, index: u32) -> Self {
        self.arg("si", index)
    }
}

filter_type!(
    /// `crop=w:h[:x:y]`.
    Crop => "crop"
);

impl Crop {
    /// Crop to `width` x `height`, centered unless [`Crop::at`] is used.
    pub fn new(width: impl Into<Value>, height: impl Into<Value>) -> Self {
        let mut f = Self::empty();
        f.node.add_base("w", width).add_base("h", height);
        f
    }

    /// Top-left corner of the crop window.
    pub fn at(mut self, x: impl Into<Value>, y: impl Into<Value>) -> Self {
        place(&mut self.node, x, y);
        self
    }
}

// Positional shorthand is only valid before the first `key=value`.
fn place(node: &mut FilterNode, x: impl Into<Value>, y: impl Into<Value>) {
    if node.is_buffering() {
        node.add_base("x", x).add_base("y", y);
    } else {
        node.add_named("x", [x]).add_named("y", [y]);
    }
}

filter_type!(
    /// `pad=w:h[:x:y]`.
    Pad => "pad"
);

impl Pad {
    /// Pad to `width` x `height`.
    pub fn new(width: impl Into<Value>, height: impl Into<Value>) -> Self {
        let mut f = Self::empty();
        f.node.add_base("w", width).add_base("h", height);
        f
    }

    /// Position of the input inside the padded frame.
    pub fn at(mut self, x: impl Into<Value>, y: impl Into<Value>) -> Self {
        place(&mut self.node, x, y);
        self
    }

    pub fn color(self, color: &str) -> Self {
        self.arg("color", color)
    }
}

filter_type!(
    /// `fps=rate`.
    Fps => "fps"
);

impl Fps {
    /// Resample to `rate` frames per second.
    pub fn new(rate: impl Into<Value>) -> Self {
        let mut f = Self::empty();
        f.node.add_base("fps", rate);
        f
    }
}

filter_type!(
    /// `format=pix_fmts=a|b`.
    Format => "format"
);

impl Format {
    /// Constrain the output to one of `formats`.
    pub fn new(formats: impl IntoIterator<Item = PixelFormat>) -> Self {
        let joined = formats
            .into_iter()
            .map(|f| f.command())
            .collect::<Vec<_>>()
            .join("|");
        Self::empty().arg("pix_fmts", joined)
    }
}

filter_type!(
    /// `setpts=expr`.
    Setpts => "setpts"
);

impl Setpts {
    /// Rewrite timestamps with `expr`, e.g. `PTS-STARTPTS`.
    pub fn new(expr: &str) -> Self {
        let mut f = Self::empty();
        f.node.add_base("expr", expr);
        f
    }
}

filter_type!(
    /// `trim=start=..:end=..`.
    Trim => "trim"
);

impl Trim {
    pub fn new() -> Self {
        Self::empty()
    }

    /// Keep `[start, end)` seconds. `end` before `start` is rejected.
    pub fn range(start: impl Into<Value>, end: impl Into<Value>) -> FfgraphResult<Self> {
        let (start, end) = (start.into(), end.into());
        if let (Some(s), Some(e)) = (seconds(&start), seconds(&end))
            && e < s
        {
            return Err(FfgraphError::contract(format!(
                "trim end ({e}) is before start ({s})"
            )));
        }
        Ok(Self::new().start(start).end(end))
    }

    /// First kept timestamp, in seconds.
    pub fn start(self, secs: impl Into<Value>) -> Self {
        self.arg("start", secs)
    }

    /// First dropped timestamp, in seconds.
    pub fn end(self, secs: impl Into<Value>) -> Self {
        self.arg("end", secs)
    }

    /// Maximum kept duration, in seconds.
    pub fn duration(self, secs: impl Into<Value>) -> Self {
        self.arg("duration", secs)
    }
}

impl Default for Trim {
    fn default() -> Self {
        Self::new()
    }
}

fn seconds(v: &Value) -> Option<f64> {
    match v {
        Value::Int(i) => Some(*i as f64),
        Value::UInt(u) => Some(*u as f64),
        Value::Float(f) => Some(*f),
        Value::Decimal(d) => d.to_f64(),
        Value::Text(t) => t.parse().ok(),
        Value::Bool(_) | Value::Alias(_) => None,
    }
}

filter_type!(
    /// `drawtext=text='..':...`.
    DrawText => "drawtext"
);

impl DrawText {
    /// Draw `text`, escaped and quoted.
    pub fn new(text: &str) -> Self {
        Self::empty().arg("text", quote_literal(text))
    }

    pub fn font_file(self, path: &str) -> Self {
        self.arg("fontfile", quote_literal(path))
    }

    pub fn font_size(self, size: impl Into<Value>) -> Self {
        self.arg("fontsize", size)
    }

    /// Font color, e.g. `white` or `0xRRGGBB`.
    pub fn font_color(self, color: &str) -> Self {
        self.arg("fontcolor", color)
    }

    /// Text position (expressions allowed).
    pub fn position(self, x: impl Into<Value>, y: impl Into<Value>) -> Self {
        self.arg("x", x).arg("y", y)
    }
}

filter_type!(
    /// `concat=n=..:v=..:a=..`.
    Concat => "concat"
);

impl Concat {
    /// Join `segments` segments, each with `video` video and `audio` audio streams.
    pub fn new(segments: u32, video: u32, audio: u32) -> Self {
        Self::empty()
            .arg("n", segments)
            .arg("v", video)
            .arg("a", audio)
    }
}

filter_type!(
    /// `volume=level`.
    Volume => "volume"
);

impl Volume {
    /// Scale audio by `level` (a factor or a dB string such as `-3dB`).
    pub fn new(level: impl Into<Value>) -> Self {
        let mut f = Self::empty();
        f.node.add_base("volume", level);
        f
    }
}

filter_type!(
    /// `split=n`, duplicating one stream into `n` outputs inside a chain.
    Split => "split"
);

impl Split {
    /// Duplicate the input `outputs` times.
    pub fn new(outputs: u32) -> Self {
        let mut f = Self::empty();
        f.node.add_base("outputs", outputs);
        f
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/library.rs"]
mod tests;
