//! Error types for the demo views.

/// Result type alias for demo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a demo view.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A static fixture file failed to parse.
    #[error("Failed to parse fixture '{name}': {source}")]
    Fixture {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The requested view does not exist.
    #[error("Unknown view '{0}', expected 'orders' or 'users'")]
    UnknownView(String),
}

impl Error {
    /// Create a fixture parse error.
    pub fn fixture(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Fixture {
            name: name.into(),
            source,
        }
    }
}
