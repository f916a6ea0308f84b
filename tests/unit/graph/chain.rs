use super::*;
use crate::filter::library::{Movie, Overlay, Scale};
use crate::filter::node::FilterNode;

#[test]
fn single_node_with_output_label() {
    let graph = Graph::new().append(Movie::new("test.jpg")).with_output("wm");
    assert_eq!(graph.render(), "movie=test.jpg[wm]");
    assert_eq!(graph.statement(), "movie=test.jpg");
    assert_eq!(graph.output_label(), Some("wm"));
}

#[test]
fn inputs_prefix_and_nodes_join_with_commas() {
    let graph = Graph::new()
        .with_inputs(["in", "wm"])
        .append_all([
            "overlay=(main_w-overlay_w)/2:(main_h-overlay_h)/2",
            "scale=1280:720",
        ])
        .with_output("out");
    assert_eq!(
        graph.render(),
        "[in][wm]overlay=(main_w-overlay_w)/2:(main_h-overlay_h)/2,scale=1280:720[out]"
    );
}

#[test]
fn typed_filters_and_raw_nodes_mix() {
    let mut node = FilterNode::new("hflip");
    node.flush();
    let stream = Stream::new()
        .with_inputs(["0:v"])
        .append(Overlay::centered())
        .append(node)
        .append(Scale::new(640, 360));
    assert_eq!(
        stream.output(),
        "[0:v]overlay=(main_w-overlay_w)/2:(main_h-overlay_h)/2,hflip,scale=640:360"
    );
    assert_eq!(stream.output(), stream.render());
    assert_eq!(stream.to_string(), stream.render());
}

#[test]
fn empty_chain_yields_empty_statement() {
    let graph = Graph::new().with_inputs(["a"]);
    assert!(graph.is_empty());
    assert_eq!(graph.statement(), "");
    assert_eq!(graph.render(), "");
    assert_eq!(Graph::new().with_output("x").render(), "[x]");
}

#[test]
fn no_inputs_means_no_prefix() {
    let graph = Graph::new().with_inputs(Vec::<String>::new()).append("null");
    assert_eq!(graph.render(), "null");
    assert!(graph.inputs().is_empty());
    assert_eq!(graph.nodes(), ["null"]);
}
