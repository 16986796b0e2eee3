//! Color resolution
//!
//! Colors are named by identifier: a name from the color table, a hex
//! triplet, an `rgb()` triple or an xterm palette index. An identifier is
//! resolved to RGB and then formatted for one of three targets:
//!
//! - Foreground: SGR 38 (or 30-37/90-97 in 16-color mode)
//! - Background: SGR 48 (or 40-47/100-107 in 16-color mode)
//! - Screen: OSC 11 with an `rgb:rr/gg/bb` payload
//!
//! The free functions in this module use a process-wide [`Resolver`], built
//! on first use with the bundled table and truecolor sequences, or from a
//! [`Config`] passed to [`init`] before first use.

pub mod palette;
pub(crate) mod resolver;
mod rgb;
mod table;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub use crate::error::UnknownColorError;
pub use resolver::{Resolver, SequenceTable};
pub use rgb::Rgb;
pub use table::ColorTable;

use crate::config::Config;
use crate::error::Result;

/// Restores the default foreground color
pub const FRONT_OUT: &str = "\x1b[39m";
/// Restores the default background color
pub const BACK_OUT: &str = "\x1b[49m";
/// Restores the default screen background color
pub const SCREEN_OUT: &str = "\x1b]111\x07";

/// Rendering channel a color sequence affects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Text foreground
    Foreground,
    /// Text background
    Background,
    /// Whole-screen default background
    Screen,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Foreground, Target::Background, Target::Screen];

    /// Sequence restoring the default color of this channel
    pub const fn reset_sequence(self) -> &'static str {
        match self {
            Target::Foreground => FRONT_OUT,
            Target::Background => BACK_OUT,
            Target::Screen => SCREEN_OUT,
        }
    }

    /// Format a resolved color for this channel.
    ///
    /// `mode` only affects the SGR targets; screen sequences always carry the
    /// exact color.
    pub fn sequence(self, rgb: Rgb, mode: ColorMode) -> String {
        let (extended, normal, bright) = match self {
            Target::Foreground => (38, 30, 90),
            Target::Background => (48, 40, 100),
            Target::Screen => return format!("\x1b]11;rgb:{}\x07", rgb.to_osc_payload()),
        };

        match mode {
            ColorMode::TrueColor => {
                format!("\x1b[{};2;{};{};{}m", extended, rgb.r, rgb.g, rgb.b)
            }
            ColorMode::Ansi256 => format!("\x1b[{};5;{}m", extended, palette::nearest_256(rgb)),
            ColorMode::Ansi16 => {
                let index = palette::nearest_16(rgb);
                if index < 8 {
                    format!("\x1b[{}m", normal + index)
                } else {
                    format!("\x1b[{}m", bright + index - 8)
                }
            }
        }
    }
}

/// Color model for foreground and background sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// 24-bit `38;2;r;g;b`
    #[default]
    TrueColor,
    /// Nearest xterm 256-color entry, `38;5;n`
    Ansi256,
    /// Nearest of the 16 ANSI colors
    Ansi16,
}

impl ColorMode {
    /// Parse a mode name, case-insensitive
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" => Some(ColorMode::TrueColor),
            "ansi256" | "256" => Some(ColorMode::Ansi256),
            "ansi16" | "16" => Some(ColorMode::Ansi16),
            _ => None,
        }
    }
}

static GLOBAL: OnceLock<Resolver> = OnceLock::new();

/// Build the process-wide resolver from `config`.
///
/// Only the first initialization takes effect; later calls (or calls after
/// the default resolver was already built by [`global`]) return the
/// existing resolver unchanged. A warning is logged when the ignored config
/// asks for something other than what is already in effect.
pub fn init(config: &Config) -> Result<&'static Resolver> {
    if let Some(existing) = GLOBAL.get() {
        if existing.matches_config(config) {
            tracing::debug!("color resolver already initialized");
        } else {
            tracing::warn!(
                mode = ?existing.mode(),
                requested_mode = ?config.color_mode,
                "color resolver already initialized; ignoring differing config"
            );
        }
        return Ok(existing);
    }

    let resolver = Resolver::from_config(config)?;
    Ok(GLOBAL.get_or_init(|| resolver))
}

/// The process-wide resolver
pub fn global() -> &'static Resolver {
    GLOBAL.get_or_init(Resolver::default)
}

pub fn resolve_color_to_rgb(identifier: &str) -> std::result::Result<Rgb, UnknownColorError> {
    global().resolve_color_to_rgb(identifier)
}

pub fn get_color_sequence(
    identifier: &str,
    target: Target,
) -> std::result::Result<String, UnknownColorError> {
    global().get_color_sequence(identifier, target)
}

pub const fn get_color_reset_sequence(target: Target) -> &'static str {
    target.reset_sequence()
}

/// Foreground sequence for `identifier`
pub fn front(identifier: &str) -> std::result::Result<String, UnknownColorError> {
    global().front(identifier)
}

/// Background sequence for `identifier`
pub fn back(identifier: &str) -> std::result::Result<String, UnknownColorError> {
    global().back(identifier)
}

/// Screen background sequence for `identifier`
pub fn screen(identifier: &str) -> std::result::Result<String, UnknownColorError> {
    global().screen(identifier)
}

/// Precomputed foreground sequence of a table name
pub fn front_named(name: &str) -> Option<&'static str> {
    global().named(Target::Foreground).get(name)
}

/// Precomputed background sequence of a table name
pub fn back_named(name: &str) -> Option<&'static str> {
    global().named(Target::Background).get(name)
}

/// Precomputed screen sequence of a table name
pub fn screen_named(name: &str) -> Option<&'static str> {
    global().named(Target::Screen).get(name)
}
