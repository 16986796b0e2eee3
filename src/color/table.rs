//! Closed table of named colors
//!
//! Entries are stored packed as `0xRRGGBB` and decoded on lookup. The
//! bundled table holds the CSS/X11 named colors; any other JSON object of
//! the same shape can be loaded in its place.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use super::Rgb;
use crate::error::{Error, Result};

const BUNDLED_COLOR_NAMES: &str = include_str!("../../data/color_names.json");

/// Entries in document order, duplicates included
struct RawEntries(Vec<(String, u32)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of color name to packed RGB integer")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<RawEntries, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, u32>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Mapping from color name to packed RGB value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    entries: BTreeMap<String, u32>,
}

impl ColorTable {
    /// The table shipped with the crate
    pub fn bundled() -> Self {
        Self::bundled_ref().clone()
    }

    /// The bundled table, parsed once per process
    pub(crate) fn bundled_ref() -> &'static ColorTable {
        static BUNDLED: OnceLock<ColorTable> = OnceLock::new();
        BUNDLED.get_or_init(|| {
            ColorTable::from_json(BUNDLED_COLOR_NAMES).expect("bundled color table is valid")
        })
    }

    /// Load a table from a JSON object of `name: packed` pairs. Each name
    /// may appear only once.
    pub fn from_json(json: &str) -> Result<Self> {
        let RawEntries(raw) = serde_json::from_str(json)?;

        let mut entries = BTreeMap::new();
        for (name, value) in raw {
            if value > 0xFF_FFFF {
                return Err(Error::InvalidEntry { name, value });
            }
            if entries.contains_key(&name) {
                return Err(Error::DuplicateEntry { name });
            }
            entries.insert(name, value);
        }

        tracing::trace!(names = entries.len(), "loaded color table");
        Ok(Self { entries })
    }

    /// Add or replace a named color, consuming the table
    pub fn with_color(mut self, name: impl Into<String>, rgb: Rgb) -> Self {
        self.entries.insert(name.into(), rgb.to_packed());
        self
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.entries.get(name).copied().map(Rgb::from_packed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.entries
            .iter()
            .map(|(name, &packed)| (name.as_str(), Rgb::from_packed(packed)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table() {
        let table = ColorTable::bundled();
        assert_eq!(table.len(), 148);
        assert_eq!(table.get("red"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(table.get("rebeccapurple"), Some(Rgb::new(0x66, 0x33, 0x99)));
        assert_eq!(table.get("aliceblue"), Some(Rgb::new(0xf0, 0xf8, 0xff)));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = ColorTable::bundled();
        assert!(table.contains("red"));
        assert!(!table.contains("Red"));
        assert_eq!(table.get("RED"), None);
    }

    #[test]
    fn test_from_json() {
        let table = ColorTable::from_json(r#"{"brand": 16746496, "ink": 0}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("brand"), Some(Rgb::new(255, 136, 0)));
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["brand", "ink"]);
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let err = ColorTable::from_json(r#"{"huge": 16777216}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidEntry { ref name, value } if name == "huge" && value == 0x1000000));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            ColorTable::from_json(r#"["red"]"#),
            Err(Error::Table(_))
        ));
        assert!(matches!(
            ColorTable::from_json(r##"{"red": "#ff0000"}"##),
            Err(Error::Table(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_duplicate_names() {
        let err = ColorTable::from_json(r#"{"ink": 0, "brand": 1, "ink": 16777215}"#).unwrap_err();
        assert!(matches!(err, Error::DuplicateEntry { ref name } if name == "ink"));
        assert_eq!(err.to_string(), "Color table has more than one entry for 'ink'");
    }

    #[test]
    fn test_bundled_is_stable() {
        assert!(std::ptr::eq(ColorTable::bundled_ref(), ColorTable::bundled_ref()));
        assert_eq!(&ColorTable::bundled(), ColorTable::bundled_ref());
    }

    #[test]
    fn test_with_color() {
        let table = ColorTable::default().with_color("brand", Rgb::new(1, 2, 3));
        assert_eq!(table.get("brand"), Some(Rgb::new(1, 2, 3)));
        assert!(!table.is_empty());
    }
}
