//! Color resolution and per-name sequence caches

use std::collections::BTreeMap;

use super::{palette, ColorMode, ColorTable, Rgb, Target};
use crate::config::Config;
use crate::error::{Result, UnknownColorError};

/// Resolve an identifier against a table, then the fallback formats:
/// `#rgb`/`#rrggbb`, `rgb(r, g, b)`, and a bare 0-255 palette index.
pub(crate) fn resolve_in(table: &ColorTable, identifier: &str) -> Option<Rgb> {
    table
        .get(identifier)
        .or_else(|| Rgb::parse_hex(identifier))
        .or_else(|| Rgb::parse_function(identifier))
        .or_else(|| palette::parse_index(identifier))
}

/// Read-only mapping from color name to a precomputed sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceTable {
    entries: BTreeMap<String, String>,
}

impl SequenceTable {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, sequence)| (name.as_str(), sequence.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Turns color identifiers into escape sequences.
///
/// Construction precomputes the foreground, background and screen sequence
/// of every table name. Nothing is mutated afterwards, so a resolver can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct Resolver {
    table: ColorTable,
    mode: ColorMode,
    front: SequenceTable,
    back: SequenceTable,
    screen: SequenceTable,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ColorTable::bundled(), ColorMode::default())
    }
}

impl Resolver {
    pub fn new(table: ColorTable, mode: ColorMode) -> Self {
        let precompute = |target: Target| SequenceTable {
            entries: table
                .iter()
                .map(|(name, rgb)| (name.to_string(), target.sequence(rgb, mode)))
                .collect(),
        };

        let front = precompute(Target::Foreground);
        let back = precompute(Target::Background);
        let screen = precompute(Target::Screen);

        tracing::debug!(names = table.len(), ?mode, "precomputed color sequences");

        Self {
            table,
            mode,
            front,
            back,
            screen,
        }
    }

    /// Build from a config: bundled table plus custom colors
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.color_table()?, config.color_mode))
    }

    /// Whether building from `config` would give this resolver's mode and table
    pub fn matches_config(&self, config: &Config) -> bool {
        self.mode == config.color_mode
            && config.color_table().is_ok_and(|table| table == self.table)
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    pub fn resolve_color_to_rgb(&self, identifier: &str) -> std::result::Result<Rgb, UnknownColorError> {
        resolve_in(&self.table, identifier).ok_or_else(|| {
            tracing::trace!(identifier, "unresolved color identifier");
            UnknownColorError::new(identifier)
        })
    }

    pub fn get_color_sequence(
        &self,
        identifier: &str,
        target: Target,
    ) -> std::result::Result<String, UnknownColorError> {
        let rgb = self.resolve_color_to_rgb(identifier)?;
        Ok(self.sequence_for_rgb(rgb, target))
    }

    /// Sequence for an already-resolved color in this resolver's mode
    pub fn sequence_for_rgb(&self, rgb: Rgb, target: Target) -> String {
        target.sequence(rgb, self.mode)
    }

    /// Precomputed sequences of every table name for `target`
    pub fn named(&self, target: Target) -> &SequenceTable {
        match target {
            Target::Foreground => &self.front,
            Target::Background => &self.back,
            Target::Screen => &self.screen,
        }
    }

    pub fn front(&self, identifier: &str) -> std::result::Result<String, UnknownColorError> {
        self.get_color_sequence(identifier, Target::Foreground)
    }

    pub fn back(&self, identifier: &str) -> std::result::Result<String, UnknownColorError> {
        self.get_color_sequence(identifier, Target::Background)
    }

    pub fn screen(&self, identifier: &str) -> std::result::Result<String, UnknownColorError> {
        self.get_color_sequence(identifier, Target::Screen)
    }
}
