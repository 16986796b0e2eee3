//! Resolver configuration
//!
//! Precedence: environment variables > TOML text > defaults.
//!
//! ```toml
//! color_mode = "ansi256"
//!
//! [colors]
//! brand = "#ff8800"
//! muted = "slategray"
//! ```

use std::collections::BTreeMap;
use std::env;

use serde::{Deserialize, Serialize};

use crate::color::{resolver, ColorMode, ColorTable};
use crate::error::{Error, Result};

/// Environment variable overriding [`Config::color_mode`]
pub const COLOR_MODE_ENV: &str = "TERM_STRINGS_COLOR_MODE";

/// Configuration for building a [`Resolver`](crate::color::Resolver)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color model used for foreground/background sequences
    #[serde(default)]
    pub color_mode: ColorMode,

    /// Extra named colors merged over the bundled table. Values accept any
    /// identifier the resolver accepts, including bundled names.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration with full precedence:
    /// environment variables > TOML text > defaults
    pub fn load(toml_text: Option<&str>) -> Result<Self> {
        let mut config = match toml_text {
            Some(text) => toml::from_str(text)?,
            None => Config::default(),
        };

        config.apply_env_vars();
        config.validate()?;

        Ok(config)
    }

    /// Parse and validate TOML text, ignoring the environment
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variables to config
    pub fn apply_env_vars(&mut self) {
        let value = env::var(COLOR_MODE_ENV).ok();
        self.apply_color_mode_override(value.as_deref());
    }

    fn apply_color_mode_override(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };
        match ColorMode::from_name(value) {
            Some(mode) => self.color_mode = mode,
            None => tracing::warn!(
                variable = COLOR_MODE_ENV,
                value,
                "ignoring unrecognized color mode"
            ),
        }
    }

    /// Check that every custom color resolves
    pub fn validate(&self) -> Result<()> {
        self.color_table().map(|_| ())
    }

    /// The bundled table with custom colors merged in
    pub fn color_table(&self) -> Result<ColorTable> {
        let bundled = ColorTable::bundled_ref();
        let mut table = bundled.clone();

        for (name, value) in &self.colors {
            let rgb = resolver::resolve_in(bundled, value).ok_or_else(|| Error::InvalidColor {
                name: name.clone(),
                value: value.clone(),
            })?;
            table = table.with_color(name.clone(), rgb);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.color_mode, ColorMode::TrueColor);
        assert!(config.colors.is_empty());
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(
            r##"
            color_mode = "ansi256"

            [colors]
            brand = "#ff8800"
            muted = "slategray"
            "##,
        )
        .unwrap();

        assert_eq!(config.color_mode, ColorMode::Ansi256);
        let table = config.color_table().unwrap();
        assert_eq!(table.get("brand"), Some(Rgb::new(255, 136, 0)));
        assert_eq!(table.get("muted"), table.get("slategray"));
        assert_eq!(table.len(), 150);
    }

    #[test]
    fn test_custom_color_overrides_bundled() {
        let config = Config::from_toml_str("[colors]\nred = \"rgb(200, 0, 0)\"").unwrap();
        let table = config.color_table().unwrap();
        assert_eq!(table.get("red"), Some(Rgb::new(200, 0, 0)));
    }

    #[test]
    fn test_load_validates_custom_colors() {
        assert!(Config::load(None).is_ok());
        assert!(Config::load(Some("[colors]\nbad = \"nope\"")).is_err());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_color_mode() {
        let err = Config::from_toml_str("color_mode = \"ansi8\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_custom_color() {
        let err = Config::from_toml_str("[colors]\nbrand = \"#ff88\"").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidColor { ref name, ref value } if name == "brand" && value == "#ff88"
        ));
        assert_eq!(
            err.to_string(),
            "Config error in 'colors.brand': invalid color '#ff88'"
        );
    }

    #[test]
    fn test_color_mode_override() {
        let mut config = Config::default();
        config.apply_color_mode_override(Some("ansi16"));
        assert_eq!(config.color_mode, ColorMode::Ansi16);

        config.apply_color_mode_override(Some("bogus"));
        assert_eq!(config.color_mode, ColorMode::Ansi16);

        config.apply_color_mode_override(None);
        assert_eq!(config.color_mode, ColorMode::Ansi16);
    }
}
