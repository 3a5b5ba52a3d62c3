//! Structured error types for the oligo workspace.

use thiserror::Error;

/// Unified error type for all boundary-level operations.
///
/// The pure calculators in `oligo-seq` never return this; it is produced
/// where raw input is validated before a calculation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OligoError {
    /// Raw sequence text is empty or contains characters outside the alphabet.
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),

    /// A building-block weight is missing, non-positive, or not finite.
    #[error("invalid building block: {0}")]
    InvalidBuildingBlock(String),

    /// Malformed structured input (JSON payloads at the boundary)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl OligoError {
    /// Stable snake_case tag for the variant, for callers that branch on the
    /// kind of failure rather than its message.
    pub fn kind(&self) -> &'static str {
        match self {
            OligoError::InvalidSequence(_) => "invalid_sequence",
            OligoError::InvalidBuildingBlock(_) => "invalid_building_block",
            OligoError::Parse(_) => "parse",
            OligoError::InvalidInput(_) => "invalid_input",
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, OligoError>;
