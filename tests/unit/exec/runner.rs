use super::*;
use std::cell::RefCell;

#[derive(Default)]
struct Recording {
    calls: RefCell<Vec<Vec<String>>>,
}

impl Executor for Recording {
    fn execute(&self, args: &[String]) -> FfgraphResult<ExecOutput> {
        self.calls.borrow_mut().push(args.to_vec());
        Ok(ExecOutput {
            status: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

#[test]
fn run_hands_rendered_tokens_to_the_executor() {
    let exec = Recording::default();
    let cmd = FfmpegCommand::new().overwrite().input("a.mp4").output("b.mp4");
    let out = run(&exec, &cmd).unwrap();
    assert_eq!(out.status, Some(0));
    assert_eq!(
        exec.calls.borrow().as_slice(),
        [vec!["-y", "-i", "a.mp4", "b.mp4"]]
    );
}

#[test]
fn quoted_values_reach_the_executor_unquoted() {
    let exec = Recording::default();
    let cmd = FfmpegCommand::new()
        .metadata("title", "My Clip")
        .output("b.mp4");
    run(&exec, &cmd).unwrap();
    assert_eq!(
        exec.calls.borrow().as_slice(),
        [vec!["-metadata", "title=My Clip", "b.mp4"]]
    );
}

#[test]
fn missing_program_is_an_execution_error() {
    let exec = SystemExecutor::new("ffgraph-definitely-not-a-real-binary");
    let err = exec.execute(&[]).unwrap_err();
    assert!(matches!(err, FfgraphError::Execution(_)));
    assert!(!is_on_path("ffgraph-definitely-not-a-real-binary"));
}

#[test]
fn named_constructors_pick_the_program() {
    assert_eq!(SystemExecutor::ffmpeg().program(), Path::new("ffmpeg"));
    assert_eq!(SystemExecutor::ffprobe().program(), Path::new("ffprobe"));
}
