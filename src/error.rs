//! Error types for color resolution and resolver construction

use thiserror::Error;

/// A color identifier that is neither a table name nor an accepted
/// fallback format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown color: {identifier:?}")]
pub struct UnknownColorError {
    /// The identifier exactly as the caller supplied it
    pub identifier: String,
}

impl UnknownColorError {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

/// Error type for building color tables, configs and resolvers
#[derive(Error, Debug)]
pub enum Error {
    /// Color identifier could not be resolved
    #[error(transparent)]
    UnknownColor(#[from] UnknownColorError),

    /// Color table is not a JSON object of name to packed RGB
    #[error("Malformed color table: {0}")]
    Table(#[from] serde_json::Error),

    /// Packed color value does not fit in 24 bits
    #[error("Color table entry '{name}' has out-of-range value {value:#x}")]
    InvalidEntry { name: String, value: u32 },

    /// Color table names the same color twice
    #[error("Color table has more than one entry for '{name}'")]
    DuplicateEntry { name: String },

    /// Config text is not valid TOML for the config schema
    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    /// A configured custom color does not resolve
    #[error("Config error in 'colors.{name}': invalid color '{value}'")]
    InvalidColor { name: String, value: String },
}

/// Result type for resolver construction
pub type Result<T> = std::result::Result<T, Error>;
