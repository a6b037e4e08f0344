//! Outcome Error Types (Standalone)
//!
//! Following the pattern used by Tokio, Bevy, and other major Rust projects.

use thiserror::Error;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Construction-boundary errors
///
/// The combinator surface itself never fails; variant mismatches go through
/// the panicking extractors instead. The only fallible operation left is
/// building an outcome from untrusted data, and it fails eagerly with this
/// type. No central error crate dependency - this is self-contained.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    /// Variant tag is neither `ok` nor `err` (case-insensitive)
    #[error("expected kind 'ok' or 'err', got '{got}'")]
    InvalidKind { got: String },
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl OutcomeError {
    /// Create an invalid kind error
    pub fn invalid_kind(got: impl Into<String>) -> Self {
        Self::InvalidKind { got: got.into() }
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl OutcomeError {
    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidKind { .. } => "OUTCOME_INVALID_KIND",
        }
    }

    /// Check if this is a client error (user's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidKind { .. })
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        // A bad tag stays bad; retrying cannot help.
        false
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result type alias for outcome construction
pub type OutcomeResult<T> = std::result::Result<T, OutcomeError>;

// ============================================================================
// TESTS
// ============================================================================
