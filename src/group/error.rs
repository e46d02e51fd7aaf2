//! Errors raised while validating group data

use thiserror::Error;

/// Errors that can occur when building or using a finite group
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The table is not a valid group operation (not a Latin square, or an axiom fails)
    #[error("Invalid group: {0}")]
    InvalidGroup(String),

    /// Shapes or indices do not agree with the group order
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),
}

/// Result alias used throughout the group and representation modules
pub type Result<T> = std::result::Result<T, GroupError>;
