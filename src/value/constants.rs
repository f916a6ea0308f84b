//! Enumerated option values used by the filter library and the command builder.
//!
//! Only the handful of constants the typed builders need live here; anything else can be
//! passed as plain text.

crate::alias_enum! {
    /// Pixel formats accepted by `-pix_fmt` and the `format` filter.
    pub enum PixelFormat {
        Yuv420p,
        Yuv422p,
        Yuv444p,
        Yuv420p10le,
        Nv12,
        Rgb24,
        Rgba,
        Bgra,
        Gray,
    }
}

crate::alias_enum! {
    /// Video encoders for `-c:v`.
    pub enum VideoCodec {
        Libx264,
        Libx265,
        LibvpxVp9 = "libvpx-vp9",
        LibaomAv1 = "libaom-av1",
        LibsvtAv1 = "libsvtav1",
        ProresKs = "prores_ks",
        H264Nvenc = "h264_nvenc",
        Mpeg4,
        Copy = "copy",
    }
}

crate::alias_enum! {
    /// Audio encoders for `-c:a`.
    pub enum AudioCodec {
        Aac,
        Libopus,
        Libmp3lame,
        Flac,
        PcmS16le = "pcm_s16le",
        Copy = "copy",
    }
}

crate::alias_enum! {
    /// Scaler algorithms for the `scale` filter's `flags` option.
    pub enum ScaleFlags {
        FastBilinear = "fast_bilinear",
        Bilinear,
        Bicubic,
        Neighbor,
        Area,
        Gauss,
        Lanczos,
        Spline,
    }
}

crate::alias_enum! {
    /// `scale` filter `force_original_aspect_ratio` modes.
    pub enum AspectMode {
        Disable,
        Decrease,
        Increase,
    }
}

crate::alias_enum! {
    /// Verbosity for `-loglevel`.
    pub enum LogLevel {
        Quiet,
        Panic,
        Fatal,
        Error,
        Warning,
        Info,
        Verbose,
        Debug,
        Trace,
    }
}

crate::alias_enum! {
    /// x264/x265 speed presets for `-preset`.
    pub enum Preset {
        Ultrafast,
        Superfast,
        Veryfast,
        Faster,
        Fast,
        Medium,
        Slow,
        Slower,
        Veryslow,
        Placebo,
    }
}

crate::alias_enum! {
    /// `overlay` filter behaviour once the secondary input ends.
    pub enum EofAction {
        Repeat,
        EndAll = "endall",
        Pass,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/constants.rs"]
mod tests;
