//! Container error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// Insertion refused because the container reached its capacity
    #[error("{0}")]
    Full(String),

    /// Removal attempted on an empty container
    #[error("{0}")]
    Empty(String),

    #[error("Invalid capacity: {capacity}")]
    InvalidCapacity { capacity: usize },
}

impl StructureError {
    pub fn full(message: impl Into<String>) -> Self {
        Self::Full(message.into())
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self::Empty(message.into())
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

pub type StructureResult<T> = Result<T, StructureError>;
