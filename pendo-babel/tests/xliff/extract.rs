//! Extraction of escaped units from XLIFF files

use pendo_babel::component::Component;
use pendo_babel::convert::Converter;
use pendo_babel::error::BabelError;
use pendo_babel::xliff::{extract, read_units, TransUnit};

pub(super) const GUIDE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">
  <file original="guide" source-language="en-US" datatype="pendoguide">
    <body>
      <trans-unit id="title" resname="title">
        <source>text **bold** [linklabel](https://example.com) *italic*</source>
        <note>guide title</note>
      </trans-unit>
      <trans-unit id="body">
        <source>plain &amp; simple</source>
        <target>veraltet</target>
      </trans-unit>
      <trans-unit id="footer">
        <source>untranslated</source>
      </trans-unit>
    </body>
  </file>
</xliff>
"#;

#[test]
fn test_read_units() {
    let units = read_units(GUIDE).unwrap();
    assert_eq!(
        units,
        vec![
            TransUnit {
                id: "title".to_string(),
                source: "text **bold** [linklabel](https://example.com) *italic*".to_string(),
                target: None,
                note: Some("guide title".to_string()),
            },
            TransUnit {
                id: "body".to_string(),
                source: "plain & simple".to_string(),
                target: Some("veraltet".to_string()),
                note: None,
            },
            TransUnit {
                id: "footer".to_string(),
                source: "untranslated".to_string(),
                target: None,
                note: None,
            },
        ]
    );
}

#[test]
fn test_extract_escapes_sources_and_annotates_comments() {
    let units = extract(GUIDE, &Converter::default()).unwrap();

    assert_eq!(units.len(), 3);
    assert_eq!(units[0].key, "title");
    assert_eq!(
        units[0].source,
        "text <c0>bold</c0> <c1>linklabel</c1> <c2>italic</c2>"
    );
    assert_eq!(
        units[0].comment,
        "guide title [c0: strong, c1: link, c2: emphasis]"
    );
    assert_eq!(
        units[0].components.to_vec(),
        vec![
            Component::Bold,
            Component::Link {
                url: "https://example.com".to_string()
            },
            Component::Italic,
        ]
    );

    assert_eq!(units[1].source, "plain & simple");
    assert_eq!(units[1].comment, "[]");
}

#[test]
fn test_units_without_namespace_are_read() {
    let xml = r#"<xliff version="1.2"><file><body>
        <trans-unit id="a"><source>*x*</source></trans-unit>
    </body></file></xliff>"#;
    let units = extract(xml, &Converter::default()).unwrap();
    assert_eq!(units[0].source, "<c0>x</c0>");
    assert_eq!(units[0].comment, "[c0: emphasis]");
}

#[test]
fn test_invalid_xml_is_an_error() {
    let err = read_units("<xliff><file>").unwrap_err();
    assert!(matches!(err, BabelError::Xliff(_)));
}

#[test]
fn test_unit_without_source_is_an_error() {
    let err = read_units(r#"<xliff><trans-unit id="x"/></xliff>"#).unwrap_err();
    assert!(matches!(err, BabelError::Xliff(message) if message.contains("'x'")));
}
