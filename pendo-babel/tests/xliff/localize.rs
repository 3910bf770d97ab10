//! Writing translations back into XLIFF files

use super::extract::GUIDE;
use pendo_babel::convert::Converter;
use pendo_babel::xliff::{localize, read_units};
use std::collections::HashMap;

fn translations() -> HashMap<String, String> {
    HashMap::from([
        (
            "title".to_string(),
            "something <c1>linklabel</c1> <c0>bold</c0> <c2>italic</c2> different".to_string(),
        ),
        ("body".to_string(), "schlicht & einfach".to_string()),
    ])
}

#[test]
fn test_localize_writes_targets() {
    let result = localize(GUIDE, &translations(), &Converter::default(), Some("translated")).unwrap();

    assert_eq!(result.localized, vec!["title", "body"]);
    assert_eq!(result.missing, vec!["footer"]);
    assert!(result.failures.is_empty());

    let units = read_units(&result.content).unwrap();
    assert_eq!(
        units[0].target.as_deref(),
        Some("something [linklabel](https://example.com) **bold** *italic* different")
    );
    assert_eq!(units[1].target.as_deref(), Some("schlicht & einfach"));
    assert_eq!(units[2].target, None);
}

#[test]
fn test_localize_only_touches_targets() {
    let result = localize(GUIDE, &translations(), &Converter::default(), Some("translated")).unwrap();

    let expected = GUIDE
        .replace(
            "*italic*</source>\n",
            "*italic*</source>\n        <target state=\"translated\">something [linklabel](https://example.com) **bold** *italic* different</target>\n",
        )
        .replace(
            "<target>veraltet</target>",
            "<target state=\"translated\">schlicht &amp; einfach</target>",
        );
    assert_eq!(result.content, expected);
}

#[test]
fn test_localize_without_state() {
    let translations = HashMap::from([("footer".to_string(), "unübersetzt".to_string())]);
    let result = localize(GUIDE, &translations, &Converter::default(), None).unwrap();

    assert!(result
        .content
        .contains("<source>untranslated</source>\n        <target>unübersetzt</target>"));
    assert_eq!(result.missing, vec!["title", "body"]);
}
