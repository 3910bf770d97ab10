//! Placeholder markers (`<c0>`, `</c0>`, `<c0/>`)
//!
//! The textual form is what translators see and move around, so it is part of
//! the wire contract and must stay stable.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static MARKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<(/)?c(\d+)(/)?>$").expect("valid marker regex"));

/// Which side of a placeholder span a marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerRole {
    Open,
    Close,
    SelfClosing,
}

/// A placeholder standing in for an escaped node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Marker {
    pub role: MarkerRole,
    pub index: usize,
}

impl Marker {
    pub fn open(index: usize) -> Self {
        Marker {
            role: MarkerRole::Open,
            index,
        }
    }

    pub fn close(index: usize) -> Self {
        Marker {
            role: MarkerRole::Close,
            index,
        }
    }

    pub fn self_closing(index: usize) -> Self {
        Marker {
            role: MarkerRole::SelfClosing,
            index,
        }
    }

    /// Recognize raw HTML text as a marker.
    ///
    /// Only the exact forms `<cN>`, `</cN>` and `<cN/>` qualify. Anything else,
    /// including `</cN/>` and indices that overflow `usize`, stays ordinary
    /// content.
    pub fn parse(raw: &str) -> Option<Marker> {
        let captures = MARKER_PATTERN.captures(raw)?;
        let closing = captures.get(1).is_some();
        let self_closing = captures.get(3).is_some();
        let index = captures.get(2)?.as_str().parse::<usize>().ok()?;

        let role = match (closing, self_closing) {
            (false, false) => MarkerRole::Open,
            (true, false) => MarkerRole::Close,
            (false, true) => MarkerRole::SelfClosing,
            (true, true) => return None,
        };

        Some(Marker { role, index })
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            MarkerRole::Open => write!(f, "<c{}>", self.index),
            MarkerRole::Close => write!(f, "</c{}>", self.index),
            MarkerRole::SelfClosing => write!(f, "<c{}/>", self.index),
        }
    }
}
