//! The two-variant Outcome container and its combinator algebra.
//!
//! An [`Outcome`] is fixed at construction: exactly one payload slot is
//! populated and no operation mutates an existing instance. Every combinator
//! either returns `self` unchanged or builds a new instance, so sharing
//! across threads by value or immutable reference needs no guarding.

use std::any::Any;
use std::fmt;

use crate::catch::CaughtPanic;
use crate::core::kind::OutcomeKind;

/// The outcome of a fallible operation: a success payload or a failure
/// payload, never both.
///
/// Variants are re-exported at the crate root, so `Ok(x)` / `Err(e)` work as
/// free constructors:
///
/// ```
/// use outcome_value::{Err, Ok, Outcome};
///
/// let good: Outcome<i32, String> = Ok(2);
/// let bad: Outcome<i32, String> = Err("broken".to_string());
///
/// assert_eq!(good.map(|v| v * 2).unwrap(), 4);
/// assert!(bad.is_err());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome<T, E> {
    /// Contains the success payload
    Ok(T),

    /// Contains the failure payload
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // ==================== Variant queries ====================

    /// Get the kind of this outcome
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Ok(_) => OutcomeKind::Ok,
            Self::Err(_) => OutcomeKind::Err,
        }
    }

    /// Check if this is a success
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Check if this is a failure
    #[inline]
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Check if this is a success whose payload passes `f`
    #[inline]
    #[must_use]
    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(_) => false,
        }
    }

    /// Check if this is a failure whose payload passes `f`
    #[inline]
    #[must_use]
    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Err(e) => f(e),
        }
    }

    /// Check if this is a success containing `x` (payload equality)
    #[inline]
    #[must_use]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Ok(v) if v == x)
    }

    /// Check if this is a failure containing `x` (payload equality)
    #[inline]
    #[must_use]
    pub fn contains_err(&self, x: &E) -> bool
    where
        E: PartialEq,
    {
        matches!(self, Self::Err(e) if e == x)
    }

    // ==================== Option adapters ====================

    /// Convert to the success payload, discarding any failure
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(v) => Some(v),
            Self::Err(_) => None,
        }
    }

    /// Convert to the failure payload, discarding any success
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(e) => Some(e),
        }
    }

    /// Borrow the payloads without consuming the outcome
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    // ==================== Extraction (panicking) ====================

    /// Return the success payload, panicking on a failure.
    ///
    /// The panic carries the failure payload as diagnostic context. If the
    /// payload is itself a captured panic ([`CaughtPanic`], as produced by
    /// [`catch`](crate::catch::catch)), the original panic payload is
    /// re-raised unchanged so its identity survives; otherwise the payload is
    /// logged and a synthesized message panics.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug + Any,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => raise(e, "called `Outcome::unwrap()` on an `Err` value", "unwrap"),
        }
    }

    /// Return the success payload, panicking with `msg` on a failure.
    ///
    /// Same payload-preserving rule as [`unwrap`](Self::unwrap); only the
    /// message differs.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug + Any,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => raise(e, msg, "expect"),
        }
    }

    /// Return the failure payload, panicking on a success.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug + Any,
    {
        match self {
            Self::Ok(v) => raise(
                v,
                "called `Outcome::unwrap_err()` on an `Ok` value",
                "unwrap_err",
            ),
            Self::Err(e) => e,
        }
    }

    /// Return the failure payload, panicking with `msg` on a success.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug + Any,
    {
        match self {
            Self::Ok(v) => raise(v, msg, "expect_err"),
            Self::Err(e) => e,
        }
    }

    // ==================== Extraction (non-panicking) ====================

    /// Return the success payload or the provided default
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => default,
        }
    }

    /// Return the success payload or compute one from the failure payload
    #[inline]
    pub fn unwrap_or_else(self, op: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => op(e),
        }
    }

    // ==================== Composition ====================

    /// Return `other` if this is a success, otherwise keep the failure
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Chain an outcome-producing operation onto a success (monadic bind)
    #[inline]
    pub fn and_then<U>(self, op: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(v) => op(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Return `other` if this is a failure, otherwise keep the success
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(_) => other,
        }
    }

    /// Chain an outcome-producing recovery onto a failure
    #[inline]
    pub fn or_else<F>(self, op: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => op(e),
        }
    }

    /// Transform the success payload, leaving a failure untouched
    #[inline]
    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Ok(v) => Outcome::Ok(op(v)),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Transform the failure payload, leaving a success untouched
    #[inline]
    pub fn map_err<F>(self, op: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(op(e)),
        }
    }

    /// Apply `f` to a success payload or return the eager default.
    ///
    /// The failure payload is never consulted; use
    /// [`map_or_else`](Self::map_or_else) when the fallback needs it.
    #[inline]
    #[must_use]
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(_) => default,
        }
    }

    /// Apply `f` to a success payload or `default_op` to the failure payload
    #[inline]
    #[must_use]
    pub fn map_or_else<U>(
        self,
        default_op: impl FnOnce(E) -> U,
        f: impl FnOnce(T) -> U,
    ) -> U {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(e) => default_op(e),
        }
    }
}

// ==================== Panic routing ====================

/// Raise path shared by the four panicking extractors.
///
/// If the opposite payload is a [`CaughtPanic`], the originally captured
/// panic payload is re-raised unchanged so upstream handlers recover the
/// exact object. Any other payload cannot travel as the panic object itself;
/// it is emitted to the diagnostic channel before a synthesized panic so it
/// is never silently lost.
#[track_caller]
fn raise<P: fmt::Debug + Any>(payload: P, msg: &str, method: &str) -> ! {
    let rendered = format!("{payload:?}");
    let boxed: Box<dyn Any> = Box::new(payload);
    match boxed.downcast::<CaughtPanic>() {
        Result::Ok(caught) => {
            tracing::error!(method, "{msg}: resuming captured panic");
            caught.resume()
        }
        Result::Err(_) => {
            tracing::error!(method, payload = %rendered, "{msg}");
            panic!("{msg}: {rendered}")
        }
    }
}
