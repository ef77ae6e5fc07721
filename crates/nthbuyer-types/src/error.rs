//! Error types for nthbuyer.

use thiserror::Error;

/// Result type alias for nthbuyer operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Errors that can occur while validating a request or estimating a wait.
#[derive(Error, Debug)]
pub enum EstimateError {
    /// A field required by the selected mode is absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A value is outside its domain or has the wrong type.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The winner timestamp list could not be turned into a timeline.
    #[error(transparent)]
    Timeline(#[from] TimelineError),

    /// The `mode` field is absent or not a recognized mode.
    #[error(
        "Unknown mode: {}; expected 'purchase_rate' or 'winner_timestamps'",
        .0.as_deref().unwrap_or("<missing>")
    )]
    UnknownMode(Option<String>),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EstimateError {
    /// Creates a validation error from any displayable message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true for validation failures, including timeline failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Timeline(_))
    }
}

/// Error for winner timestamp lists that do not form a valid timeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// Fewer than two timestamps were supplied.
    #[error("winner_timestamps needs at least 2 entries, got {count}")]
    TooFewEntries {
        /// Number of entries supplied.
        count: usize,
    },

    /// A list entry is not a string.
    #[error("winner_timestamps only accepts strings (entry {index} is not a string)")]
    NotAString {
        /// Position of the offending entry.
        index: usize,
    },

    /// An entry is neither a wall-clock reading nor an absolute timestamp.
    #[error("Unrecognized timestamp at entry {index}: {value:?}")]
    UnrecognizedEncoding {
        /// Position of the offending entry.
        index: usize,
        /// The raw entry.
        value: String,
    },

    /// Absolute timestamps must be strictly ascending.
    #[error("Absolute timestamps must be strictly ascending (entry {index} is not after entry {})", .index.saturating_sub(1))]
    NotAscending {
        /// Position of the first entry that is not after its predecessor.
        index: usize,
    },
}
