//! Display implementation and diagnostic printing for Outcome
//!
//! Rendering distinguishes `Ok(value)` from `Err(error)` using the payload's
//! Debug form, so the output is unambiguous even for string payloads.

use std::fmt;

use crate::core::outcome::Outcome;

impl<T: fmt::Debug, E: fmt::Debug> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(v) => write!(f, "Ok({v:?})"),
            Outcome::Err(e) => write!(f, "Err({e:?})"),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> Outcome<T, E> {
    /// Emit a human-readable rendering to the diagnostic channel.
    ///
    /// Side-effecting only; the outcome is untouched. Advisory output, not
    /// something callers should branch on.
    pub fn print(&self) {
        match self {
            Outcome::Ok(v) => tracing::info!(value = ?v, "Ok"),
            Outcome::Err(e) => tracing::info!(error = ?e, "Err"),
        }
    }
}
