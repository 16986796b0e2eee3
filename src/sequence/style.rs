//! Text styling (SGR attributes)
//!
//! Colors live in [`crate::color`].

use super::Toggle;

/// Reset every attribute and shift back to the G0 character set
pub const CLEAR: &str = "\x1b[m\x0f";

pub const BOLD: Toggle = Toggle::new("\x1b[1m", "\x1b[22m");
pub const FAINT: Toggle = Toggle::new("\x1b[2m", "\x1b[22m");
pub const ITALIC: Toggle = Toggle::new("\x1b[3m", "\x1b[23m");
pub const UNDERLINE: Toggle = Toggle::new("\x1b[4m", "\x1b[24m");
pub const INVERSE: Toggle = Toggle::new("\x1b[7m", "\x1b[27m");
pub const HIDDEN: Toggle = Toggle::new("\x1b[8m", "\x1b[28m");
pub const STRIKETHROUGH: Toggle = Toggle::new("\x1b[9m", "\x1b[29m");

pub const ALL: &[(&str, Toggle)] = &[
    ("bold", BOLD),
    ("faint", FAINT),
    ("italic", ITALIC),
    ("underline", UNDERLINE),
    ("inverse", INVERSE),
    ("hidden", HIDDEN),
    ("strikethrough", STRIKETHROUGH),
];
