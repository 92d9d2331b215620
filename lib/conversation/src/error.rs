//! Error types for the conversation crate.

use std::fmt;

/// Errors from conversation store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store's interior lock was poisoned by a panicking writer.
    Poisoned,
    /// Storage operation failed.
    StorageFailed { reason: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poisoned => write!(f, "conversation store lock poisoned"),
            Self::StorageFailed { reason } => {
                write!(f, "conversation storage failed: {reason}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::StorageFailed {
            reason: "out of memory".to_string(),
        };
        assert!(err.to_string().contains("out of memory"));
    }
}
