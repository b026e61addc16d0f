//! Error types for tagcomplete.

/// Result type alias for tagcomplete operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when mutating the tag set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// A removal index outside `[0, len)`.
    #[error("tag index {index} is out of range for {len} tag(s)")]
    OutOfRange { index: usize, len: usize },
}

/// Errors that can occur while parsing a configuration document.
///
/// Merging an already-parsed [`PartialConfiguration`](crate::config::PartialConfiguration)
/// never fails; only reading one from text can.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document was malformed or had mistyped values.
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML document was malformed or had mistyped values.
    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// The main error type for tagcomplete operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tag-set error.
    #[error("Tag error: {0}")]
    Tag(#[from] TagError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TagError {
    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}
