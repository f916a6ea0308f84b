use super::*;
use crate::filter::library::{Movie, Overlay, Scale};
use crate::graph::chain::Chain;

#[test]
fn watermark_command_renders_in_insertion_order() {
    let filters = FilterSet::complex()
        .add_graph(Chain::new().append(Movie::new("logo.png")).with_output("wm"))
        .add_graph(
            Chain::new()
                .with_inputs(["0:v", "wm"])
                .append(Overlay::new(10, 10))
                .with_output("out"),
        );

    let cmd = FfmpegCommand::new()
        .overwrite()
        .log_level(LogLevel::Error)
        .input("in.mp4")
        .filters(&filters)
        .unwrap()
        .map_label("out")
        .map("0:a?")
        .video_codec(VideoCodec::Libx264)
        .preset(Preset::Veryfast)
        .crf(23)
        .pixel_format(PixelFormat::Yuv420p)
        .audio_codec(AudioCodec::Copy)
        .output("out.mp4");

    assert_eq!(
        cmd.to_args(),
        [
            "-y",
            "-loglevel",
            "error",
            "-i",
            "in.mp4",
            "-filter_complex",
            "movie=logo.png[wm];[0:v][wm]overlay=10:10[out]",
            "-map",
            "[out]",
            "-map",
            "0:a?",
            "-c:v",
            "libx264",
            "-preset",
            "veryfast",
            "-crf",
            "23",
            "-pix_fmt",
            "yuv420p",
            "-c:a",
            "copy",
            "out.mp4",
        ]
    );
}

#[test]
fn repeated_inputs_append_and_unique_options_replace() {
    let cmd = FfmpegCommand::new()
        .input("a.mp4")
        .frame_rate(24)
        .input("b.mp4")
        .frame_rate(29.97002997)
        .output("o.mkv");
    assert_eq!(
        cmd.to_command_line(),
        ["ffmpeg", "-i", "a.mp4", "-r", "29.970", "-i", "b.mp4", "o.mkv"]
    );
}

#[test]
fn overwrite_flags_are_exclusive() {
    let cmd = FfmpegCommand::new().overwrite().no_overwrite();
    assert_eq!(cmd.to_args(), ["-n"]);
    let cmd = cmd.overwrite();
    assert_eq!(cmd.to_args(), ["-y"]);
}

#[test]
fn simple_filters_and_raw_metadata_argument() {
    let vf = FilterSet::simple().add_graph(Chain::new().append(Scale::new(1280, -2)));
    let cmd = FfmpegCommand::new()
        .input("in.mov")
        .filters(&vf)
        .unwrap()
        .metadata("title", "My Clip")
        .no_audio()
        .output("out.mp4");
    assert_eq!(
        cmd.to_args(),
        [
            "-i",
            "in.mov",
            "-vf",
            "scale=1280:-2",
            "-metadata",
            "title=My Clip",
            "-an",
            "out.mp4",
        ]
    );
}

#[test]
fn command_line_display_keeps_quotes() {
    let cmd = FfmpegCommand::new()
        .metadata("title", "My Clip")
        .output("out.mp4");
    assert_eq!(
        cmd.to_command_line(),
        ["ffmpeg", "-metadata", "\"title=My Clip\"", "out.mp4"]
    );
    assert_eq!(cmd.to_args(), ["-metadata", "title=My Clip", "out.mp4"]);
}

#[test]
fn escape_hatch_validates_keys() {
    let cmd = FfmpegCommand::new()
        .option("-movflags", Some("+faststart".into()), true)
        .unwrap();
    assert_eq!(cmd.args().find("-movflags").unwrap().value(), Some("+faststart"));
    assert!(FfmpegCommand::new().option("", None, true).is_err());
}

#[test]
fn output_is_always_last() {
    let cmd = FfmpegCommand::new()
        .output("first.mp4")
        .input("in.mp4")
        .seek(1.5)
        .duration(rust_decimal::Decimal::new(2, 0));
    assert_eq!(
        cmd.to_args(),
        ["-i", "in.mp4", "-ss", "1.5", "-t", "2.00", "first.mp4"]
    );
    assert!(cmd.args().find(ArgumentList::OUTPUT).is_none());
}
