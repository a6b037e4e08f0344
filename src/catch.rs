//! Bridge from panic-style control flow into the outcome algebra.
//!
//! [`catch`] runs a computation synchronously and inline, turning a normal
//! return into `Ok` and a panic into `Err`. The captured payload keeps its
//! identity inside a [`CaughtPanic`]: resuming it (directly or via a later
//! `unwrap()` of the `Err`) re-raises the exact boxed object, so upstream
//! handlers recover the original cause.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::core::outcome::Outcome;

/// A panic payload captured by [`catch`].
///
/// The payload is stored verbatim; nothing is stringified or rewrapped.
/// [`message`](Self::message) recovers the text for the common
/// `panic!("...")` cases, and [`resume`](Self::resume) re-raises the
/// original object unchanged.
pub struct CaughtPanic(Box<dyn Any + Send + 'static>);

impl CaughtPanic {
    /// Get the panic message, when the payload is one of the standard
    /// string forms
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.0
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.0.downcast_ref::<String>().map(String::as_str))
    }

    /// Borrow the raw payload for downcasting
    #[must_use]
    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.0
    }

    /// Take back the boxed payload
    #[must_use]
    pub fn into_inner(self) -> Box<dyn Any + Send> {
        self.0
    }

    /// Re-raise the captured panic with its original payload
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.0)
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "CaughtPanic({msg:?})"),
            None => f.write_str("CaughtPanic(<non-string payload>)"),
        }
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(msg),
            None => f.write_str("panic with non-string payload"),
        }
    }
}

impl std::error::Error for CaughtPanic {}

/// Run `f`, capturing a panic as a failure.
///
/// This is the single supported bridge out of panic-style control flow: it
/// never panics itself, and it adds no scheduling of its own - `f` runs
/// inline with whatever blocking behavior it already has.
///
/// ```
/// use outcome_value::catch;
///
/// assert_eq!(catch(|| 42).unwrap(), 42);
///
/// let failed = catch(|| -> i32 { panic!("x") });
/// assert_eq!(failed.unwrap_err().message(), Some("x"));
/// ```
pub fn catch<T>(f: impl FnOnce() -> T) -> Outcome<T, CaughtPanic> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            tracing::debug!("captured panic as Err outcome");
            Outcome::Err(CaughtPanic(payload))
        }
    }
}
