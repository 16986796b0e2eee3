//! Term Strings
//!
//! Escape sequences for terminal user interfaces, as plain strings. Nothing
//! here writes to a terminal; callers emit the returned strings themselves.
//!
//! - `sequence`: fixed sequences and toggle pairs grouped by concern
//!   (`feature`, `request`, `screen`, `cursor`, `style`), plus cursor
//!   movement builders
//! - `color`: resolves color identifiers and formats them for the
//!   foreground, background or screen background
//! - `ansi`: a pattern matching escape sequences, for stripping and
//!   measuring styled text
//! - `config`: color mode and custom color names
//!
//! ```
//! use term_strings::{color, cursor, style};
//!
//! let line = format!(
//!     "{}{}{}{}",
//!     cursor::move_to(cursor::Position::xy(2, 0)),
//!     color::front("tomato").unwrap(),
//!     style::BOLD.wrap("warning"),
//!     color::FRONT_OUT,
//! );
//! assert_eq!(term_strings::ansi::strip(&line), "warning");
//! ```

pub mod ansi;
pub mod color;
pub mod config;
pub mod error;
pub mod sequence;

pub use color::{ColorMode, ColorTable, Resolver, Rgb, SequenceTable, Target};
pub use config::Config;
pub use error::{Error, Result, UnknownColorError};
pub use sequence::{cursor, feature, request, screen, style, Toggle};
