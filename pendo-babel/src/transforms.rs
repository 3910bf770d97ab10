//! String-level transforms around the markdown engine
//!
//! Pendo authors write color spans as `{color: #RRGGBB}text{/color}`, which
//! no markdown parser understands. Before parsing, the braces are rewritten
//! into HTML tags the parser keeps as raw HTML nodes; after serializing, the
//! tags are rewritten back.
//!
//! Both directions are plain global substitutions. They do not look at
//! nesting and leave malformed brackets (such as a 3-digit color) untouched.
//!
//! # Example
//!
//! ```
//! use pendo_babel::transforms::{from_tag_form, to_tag_form};
//!
//! let tagged = to_tag_form("{color: #FF0000}red{/color}");
//! assert_eq!(tagged, "<color value=\"#FF0000\">red</color>");
//! assert_eq!(from_tag_form(&tagged), "{color: #FF0000}red{/color}");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static BRACKET_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{color: (#[a-fA-F0-9]{6})\}").expect("valid bracket regex"));
static BRACKET_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{/color\}").expect("valid bracket regex"));
static TAG_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<color value="(#[a-fA-F0-9]{6})">"#).expect("valid tag regex"));
static TAG_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</color>").expect("valid tag regex"));

/// `{color: #RRGGBB}` → `<color value="#RRGGBB">`, `{/color}` → `</color>`
pub fn to_tag_form(text: &str) -> String {
    let opened = BRACKET_OPEN.replace_all(text, r#"<color value="$1">"#);
    BRACKET_CLOSE.replace_all(&opened, "</color>").into_owned()
}

/// `<color value="#RRGGBB">` → `{color: #RRGGBB}`, `</color>` → `{/color}`
pub fn from_tag_form(text: &str) -> String {
    let opened = TAG_OPEN.replace_all(text, "{color: $1}");
    TAG_CLOSE.replace_all(&opened, "{/color}").into_owned()
}
