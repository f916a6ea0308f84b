use super::*;
use crate::filter::library::{Movie, Overlay, Scale};

#[test]
fn complex_set_joins_statements_with_semicolons() {
    let set = FilterSet::complex()
        .add_graph(Chain::new().append(Movie::new("test.jpg")).with_output("wm"))
        .add_graph(
            Chain::new()
                .with_inputs(["in", "wm"])
                .append(Overlay::centered())
                .append(Scale::new(1280, 720))
                .with_output("out"),
        );

    assert_eq!(set.option_name(), "filter_complex");
    assert_eq!(
        set.render(),
        "movie=test.jpg[wm];[in][wm]overlay=(main_w-overlay_w)/2:(main_h-overlay_h)/2,scale=1280:720[out]"
    );
}

#[test]
fn split_statement_comes_first() {
    let set = FilterSet::complex()
        .with_split(["a", "b"])
        .add_graph(Chain::new());
    assert_eq!(set.render(), "split[a][b];");

    let set = FilterSet::complex()
        .with_split(["a", "b"])
        .add_graph(Chain::new().with_inputs(["a"]).append("hflip").with_output("c"));
    assert_eq!(set.render(), "split[a][b];[a]hflip[c]");
}

#[test]
fn empty_set_renders_nothing_and_is_not_applied() {
    let set = FilterSet::simple();
    assert!(set.is_empty());
    assert_eq!(set.render(), "");

    let mut args = ArgumentList::new();
    set.apply_to(&mut args).unwrap();
    assert!(args.is_empty());
}

#[test]
fn apply_to_sets_the_option_once() {
    let mut args = ArgumentList::new();
    FilterSet::simple()
        .add_graph(Chain::new().append(Scale::new(640, 360)))
        .apply_to(&mut args)
        .unwrap();
    FilterSet::simple()
        .add_graph(Chain::new().append(Scale::new(1280, 720)))
        .apply_to(&mut args)
        .unwrap();
    assert_eq!(args.render(Vec::<String>::new()), ["-vf", "scale=1280:720"]);
}

#[test]
fn option_names() {
    assert_eq!(FilterOption::Simple.name(), "vf");
    assert_eq!(FilterOption::Audio.name(), "af");
    assert_eq!(FilterOption::Complex.name(), "filter_complex");
    assert_eq!(FilterOption::Custom("lavfi".into()).name(), "lavfi");
    assert_eq!(FilterSet::default().option_name(), "filter_complex");
}

#[test]
fn from_name_accepts_dashed_and_custom_names() {
    assert_eq!(FilterOption::from_name("-vf"), FilterOption::Simple);
    assert_eq!(FilterOption::from_name("af"), FilterOption::Audio);
    assert_eq!(FilterOption::from_name("-filter_complex"), FilterOption::Complex);
    assert_eq!(
        FilterOption::from_name("-lavfi"),
        FilterOption::Custom("lavfi".into())
    );
}
