//! Translations with broken placeholder structure

use insta::assert_snapshot;
use pendo_babel::component::ComponentList;
use pendo_babel::convert::{convert, Converter};
use pendo_babel::escape::Anomaly;

fn components(source: &str) -> ComponentList {
    convert(source).unwrap().1
}

#[test]
fn test_missing_close_is_left_as_text() {
    let converter = Converter::default();
    let localized = converter
        .backconvert("Hallo <c0>Welt und <c1>mehr</c1>", &components("Hello **world** and *more*"))
        .unwrap();

    assert_snapshot!(localized.text, @"Hallo <c0>Welt und *mehr*");
    assert_eq!(
        localized.anomalies,
        vec![Anomaly::MissingClose {
            marker: "<c0>".to_string()
        }]
    );
}

#[test]
fn test_unknown_index_is_left_as_text() {
    let converter = Converter::default();
    let localized = converter
        .backconvert("<c5>x</c5> <c0>y</c0>", &components("**y**"))
        .unwrap();

    assert_snapshot!(localized.text, @"<c5>x</c5> **y**");
    assert_eq!(
        localized.anomalies,
        vec![Anomaly::UnknownComponent {
            marker: "<c5>".to_string()
        }]
    );
}

#[test]
fn test_dropped_placeholder_loses_only_its_syntax() {
    let converter = Converter::default();
    let localized = converter
        .backconvert(
            "etwas <c0>fett</c0> anderes",
            &components("text **bold** [linklabel](https://example.com)"),
        )
        .unwrap();

    assert_snapshot!(localized.text, @"etwas **fett** anderes");
    assert!(localized.anomalies.is_empty());
}

#[test]
fn test_duplicated_placeholder_reuses_component() {
    let converter = Converter::default();
    let localized = converter
        .backconvert("<c0>eins</c0> und <c0>zwei</c0>", &components("*one*"))
        .unwrap();

    assert_snapshot!(localized.text, @"*eins* und *zwei*");
}

#[test]
fn test_span_across_paragraphs_does_not_pair() {
    let converter = Converter::default();
    let localized = converter
        .backconvert("<c0>erster\n\nzweiter</c0>", &components("**bold**"))
        .unwrap();

    assert_snapshot!(localized.text, @r"
    <c0>erster

    zweiter</c0>
    ");
    assert_eq!(localized.anomalies.len(), 1);
}

#[test]
fn test_text_wrapped_in_leaf_component() {
    let converter = Converter::default();
    let localized = converter
        .backconvert("a <c0>b</c0>", &components("a<br>"))
        .unwrap();

    assert_snapshot!(localized.text, @"a <c0>b</c0>");
    assert_eq!(
        localized.anomalies,
        vec![Anomaly::ChildlessComponent {
            marker: "<c0>".to_string(),
            kind: "html",
        }]
    );
}
