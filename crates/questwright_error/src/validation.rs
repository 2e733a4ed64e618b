//! Submission validation errors.

/// Specific validation failures for an adventure submission.
///
/// The `Display` text of each kind is the message returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// The scene structure is absent or is not a list
    #[display("Invalid or missing scene structure")]
    MissingSceneStructure,

    /// A scene label outside the closed set of scene types
    #[display("Unknown scene type: {}", _0)]
    UnknownSceneType(String),

    /// More scenes than the configured timeline capacity
    #[display("Too many scenes: {} requested, at most {} allowed", count, max)]
    TooManyScenes {
        /// Number of scenes submitted
        count: usize,
        /// Configured capacity
        max: usize,
    },

    /// A field with an out-of-range or unusable value
    #[display("Invalid value for '{}': {}", field, reason)]
    InvalidField {
        /// The field name as it appears in the request body
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The body could not be read as an adventure request
    #[display("Malformed request body: {}", _0)]
    MalformedBody(String),
}

/// Validation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// The caller-facing message, without source location.
    ///
    /// # Examples
    ///
    /// ```
    /// use questwright_error::{ValidationError, ValidationErrorKind};
    ///
    /// let err = ValidationError::new(ValidationErrorKind::MissingSceneStructure);
    /// assert_eq!(err.message(), "Invalid or missing scene structure");
    /// ```
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
