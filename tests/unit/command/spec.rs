use super::*;

const WATERMARK: &str = r#"{
  "overwrite": true,
  "log_level": "error",
  "inputs": ["in.mp4"],
  "filters": {
    "option": "filter_complex",
    "graphs": [
      { "nodes": [{ "filter": "movie", "args": ["test.jpg"] }], "output": "wm" },
      {
        "inputs": ["in", "wm"],
        "nodes": [
          { "filter": "overlay", "args": ["(main_w-overlay_w)/2", "(main_h-overlay_h)/2"] },
          { "filter": "scale", "args": [1280, 720.0] }
        ],
        "output": "out"
      }
    ]
  },
  "maps": ["[out]"],
  "options": [
    { "key": "-c:v", "value": "libx264" },
    { "key": "-r", "value": 29.97002997 },
    { "key": "-metadata", "value": "title=Demo", "unique": false, "quoted": true }
  ],
  "output": "out.mp4"
}"#;

#[test]
fn json_document_builds_the_expected_command() {
    let spec = CommandSpec::from_json(WATERMARK).unwrap();
    let cmd = spec.build().unwrap();
    assert_eq!(
        cmd.to_args(),
        [
            "-y",
            "-loglevel",
            "error",
            "-i",
            "in.mp4",
            "-filter_complex",
            "movie=test.jpg[wm];[in][wm]overlay=(main_w-overlay_w)/2:(main_h-overlay_h)/2,scale=1280:720[out]",
            "-map",
            "[out]",
            "-c:v",
            "libx264",
            "-r",
            "29.970",
            "-metadata",
            "title=Demo",
            "out.mp4",
        ]
    );
}

#[test]
fn raw_nodes_named_args_and_separators() {
    let spec = CommandSpec::from_json(
        r#"{
          "filters": {
            "option": "vf",
            "graphs": [{
              "nodes": [
                "hflip",
                { "filter": "scale", "args": [640, -2], "named": [{ "name": "flags", "value": "lanczos" }, { "name": "eval" }] },
                { "filter": "format", "named": [{ "name": "pix_fmts", "value": "yuv420p" }], "separator": "|" }
              ]
            }]
          }
        }"#,
    )
    .unwrap();
    let set = spec.filter_set().unwrap().unwrap();
    assert_eq!(set.option_name(), "vf");
    assert_eq!(
        set.render(),
        "hflip,scale=640:-2:flags=lanczos:eval,format=pix_fmts=yuv420p"
    );
}

#[test]
fn split_labels_are_carried() {
    let spec = CommandSpec::from_json(
        r#"{ "filters": { "split": ["a", "b"], "graphs": [{}] } }"#,
    )
    .unwrap();
    let set = spec.filter_set().unwrap().unwrap();
    assert_eq!(set.option_name(), "filter_complex");
    assert_eq!(set.render(), "split[a][b];");
}

#[test]
fn bad_documents_are_rejected() {
    assert!(matches!(
        CommandSpec::from_json("{ \"inputs\": 3 }").unwrap_err(),
        FfgraphError::Serde(_)
    ));
    assert!(matches!(
        CommandSpec::from_json(r#"{ "log_level": "loud" }"#)
            .unwrap()
            .build()
            .unwrap_err(),
        FfgraphError::Validation(_)
    ));
    assert!(matches!(
        CommandSpec::from_json(r#"{ "options": [{ "key": "-x", "value": [1] }] }"#)
            .unwrap()
            .build()
            .unwrap_err(),
        FfgraphError::Validation(_)
    ));
    assert!(matches!(
        CommandSpec::from_json(r#"{ "options": [{ "key": "" }] }"#)
            .unwrap()
            .build()
            .unwrap_err(),
        FfgraphError::Contract(_)
    ));
    assert!(CommandSpec::from_path("does/not/exist.json").is_err());
}

#[test]
fn json_scalars_map_onto_values() {
    assert_eq!(json_value(&serde_json::json!(3)).unwrap(), Value::Int(3));
    assert_eq!(
        json_value(&serde_json::json!(u64::MAX)).unwrap(),
        Value::UInt(u64::MAX)
    );
    assert_eq!(json_value(&serde_json::json!(1.5)).unwrap(), Value::Float(1.5));
    assert_eq!(json_value(&serde_json::json!(true)).unwrap(), Value::Bool(true));
    assert_eq!(
        json_value(&serde_json::json!("x")).unwrap(),
        Value::Text("x".into())
    );
    assert!(json_value(&serde_json::Value::Null).is_err());
}
