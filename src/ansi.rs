//! Matching escape sequences inside text
//!
//! The pattern covers CSI sequences (including the 8-bit `0x9B` introducer),
//! single-character escapes such as RIS, and BEL-terminated OSC strings.
//! Every sequence this crate produces is matched in full.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

const ANSI_PATTERN: &str = concat!(
    r"[\x1B\x{9B}][\[\]()#;?]*",
    r"(?:",
    // OSC-style: parameters then BEL
    r"(?:(?:(?:;[-a-zA-Z\d/#&.:=?%@~_]+)*|[a-zA-Z\d]+(?:;[-a-zA-Z\d/#&.:=?%@~_]*)*)?\x07)",
    r"|",
    // CSI-style: numeric parameters then a final byte
    r"(?:(?:\d+(?:;\d*)*)?[\dA-PR-TZcf-nq-uy=><~])",
    r")",
);

/// The compiled escape-sequence pattern
pub fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(ANSI_PATTERN).expect("ANSI pattern is valid"))
}

/// Whether `text` contains any escape sequence
pub fn contains_escape(text: &str) -> bool {
    pattern().is_match(text)
}

/// Remove every escape sequence from `text`
pub fn strip(text: &str) -> Cow<'_, str> {
    pattern().replace_all(text, "")
}

/// Terminal columns `text` occupies once escape sequences are removed
pub fn display_width(text: &str) -> usize {
    strip(text).width()
}
