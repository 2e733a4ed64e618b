//! Top-level error wrapper types.

use crate::{
    ConfigError, GenerationError, HttpError, JsonError, StorageError, ValidationError,
};

/// Every error a Questwright operation can produce.
///
/// # Examples
///
/// ```
/// use questwright_error::{QuestwrightError, QuestwrightErrorKind, HttpError};
///
/// let err: QuestwrightError = HttpError::new("Connection failed").into();
/// assert!(matches!(err.kind(), QuestwrightErrorKind::Http(_)));
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum QuestwrightErrorKind {
    /// HTTP service error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Invalid submission
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Completion call failed
    #[from(GenerationError)]
    Generation(GenerationError),
    /// File read or write failed
    #[from(StorageError)]
    Storage(StorageError),
}

/// Questwright error with kind discrimination.
///
/// # Examples
///
/// ```
/// use questwright_error::{QuestwrightResult, ConfigError};
///
/// fn might_fail() -> QuestwrightResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Questwright Error: {}", _0)]
pub struct QuestwrightError(Box<QuestwrightErrorKind>);

impl QuestwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: QuestwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &QuestwrightErrorKind {
        &self.0
    }

    /// Whether the error came from a bad submission rather than the service.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), QuestwrightErrorKind::Validation(_))
    }
}

// Generic From implementation for any type that converts to QuestwrightErrorKind
impl<T> From<T> for QuestwrightError
where
    T: Into<QuestwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Questwright operations.
pub type QuestwrightResult<T> = std::result::Result<T, QuestwrightError>;
