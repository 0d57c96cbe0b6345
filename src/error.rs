//! Error types for the birth-profile library.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Broad classification of a [`ProfileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The series cannot satisfy the decomposition windows, or a window is malformed.
    Configuration,
    /// The observations or an intermediate result are unusable.
    Data,
}

/// Errors that can occur while building a birthday profile.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the configured windows.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid decomposition parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A row of input could not be turned into an observation.
    #[error("invalid observation at row {row}: {reason}")]
    InvalidObservation { row: usize, reason: String },

    /// A count is negative, NaN or infinite.
    #[error("invalid count {value} on {date}")]
    InvalidCount { date: NaiveDate, value: f64 },

    /// The same date appears more than once.
    #[error("duplicate date: {0}")]
    DuplicateDate(NaiveDate),

    /// A decomposed trend value is zero, negative or not finite.
    #[error("non-positive trend value {value} at index {index}")]
    NonPositiveTrend { index: usize, value: f64 },

    /// The trend-corrected counts sum to zero.
    #[error("total corrected count is zero")]
    ZeroTotal,

    /// A decomposition component has the wrong length.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

impl ProfileError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::InsufficientData { .. } | ProfileError::InvalidParameter(_) => {
                ErrorKind::Configuration
            }
            ProfileError::EmptyData
            | ProfileError::InvalidObservation { .. }
            | ProfileError::InvalidCount { .. }
            | ProfileError::DuplicateDate(_)
            | ProfileError::NonPositiveTrend { .. }
            | ProfileError::ZeroTotal
            | ProfileError::DimensionMismatch { .. } => ErrorKind::Data,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    pub fn is_data(&self) -> bool {
        self.kind() == ErrorKind::Data
    }
}
