//! Shared error types for chart shape classification

use thiserror::Error;

/// Main error type for chartshape operations
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer bodies than the classifier needs to describe a distribution
    #[error("Insufficient data: {found} position(s) supplied, at least {required} required")]
    InsufficientData { found: usize, required: usize },

    /// A body whose longitude is NaN or infinite
    #[error("Invalid position '{name}': longitude {longitude} is not a finite number")]
    InvalidPosition { name: String, longitude: f64 },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed position input (e.g. a `NAME=DEG` argument)
    #[error("Input error: {0}")]
    Input(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an insufficient data error for `found` positions
    pub fn insufficient(found: usize, required: usize) -> Self {
        Self::InsufficientData { found, required }
    }

    /// Create an invalid position error
    pub fn invalid_position(name: impl Into<String>, longitude: f64) -> Self {
        Self::InvalidPosition {
            name: name.into(),
            longitude,
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Whether the caller can fix the error by changing the input it supplied
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::InvalidPosition { .. } | Self::Input(_)
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
