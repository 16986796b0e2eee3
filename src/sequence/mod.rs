//! Sequence catalogue
//!
//! Fixed escape sequences grouped by concern, plus small builders for the
//! parameterized cursor movements. Stateful terminal modes are exposed as
//! [`Toggle`] pairs; tracking which half was emitted last is up to the
//! caller.

pub mod cursor;
pub mod feature;
pub mod request;
pub mod screen;
pub mod style;

use serde::Serialize;

/// The two halves of a terminal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Toggle {
    /// Turns the mode on
    pub enter: &'static str,
    /// Turns the mode off
    pub exit: &'static str,
}

impl Toggle {
    pub const fn new(enter: &'static str, exit: &'static str) -> Self {
        Self { enter, exit }
    }

    /// Surround `text` with the enter and exit sequences
    pub fn wrap(&self, text: &str) -> String {
        let mut out = String::with_capacity(self.enter.len() + text.len() + self.exit.len());
        out.push_str(self.enter);
        out.push_str(text);
        out.push_str(self.exit);
        out
    }
}
