//! Core modules
//!
//! Fundamental types behind the outcome algebra:
//!
//! ### [`outcome`] - The Outcome enum
//!
//! The central [`Outcome`] enum holds exactly one of a success payload or a
//! failure payload, fixed at construction, along with the full combinator
//! surface (introspection, extraction, composition).
//!
//! ### [`kind`] - Variant classification
//!
//! [`OutcomeKind`] is the lightweight discriminant. It also carries the one
//! runtime guard the type keeps: parsing an untrusted `"ok"`/`"err"` tag at
//! the construction boundary.
//!
//! ### [`error`] - Construction-boundary errors
//!
//! [`OutcomeError`] covers the eager tag validation failure, with code-based
//! classification for monitoring.
//!
//! ### [`display`] / [`convert`]
//!
//! Human-readable rendering plus lossless interop with
//! `std::result::Result`.
//!
//! Most users interact with re-exported items from the crate root, but this
//! module provides direct access for advanced use cases.
pub mod convert;
pub mod display;
pub mod error;
pub mod kind;
pub mod outcome;

/// Convenient re-exports of the most commonly used core types.
pub use error::{OutcomeError, OutcomeResult};
pub use kind::OutcomeKind;
pub use outcome::Outcome;
