use super::*;

#[test]
fn escape_prefixes_each_special_character() {
    assert_eq!(escape("a:b=c"), "a\\:b\\=c");
    assert_eq!(escape("[x]"), "\\[x\\]");
    assert_eq!(escape("C:\\fonts"), "C\\:\\\\fonts");
    assert_eq!(escape("plain text"), "plain text");
}

#[test]
fn quote_literal_wraps_after_escaping() {
    assert_eq!(quote_literal("time: 10"), "'time\\: 10'");
    assert_eq!(quote_literal(""), "''");
}

#[test]
fn labels_concatenate_without_separator() {
    assert_eq!(label("wm"), "[wm]");
    assert_eq!(labels(["in", "wm"]), "[in][wm]");
    assert_eq!(labels(Vec::<String>::new()), "");
}
