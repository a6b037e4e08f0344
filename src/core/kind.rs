//! Outcome kinds and the untrusted-tag construction boundary.
//!
//! The variant of an [`Outcome`] is enforced by the type system everywhere
//! except where a tag arrives as data. [`OutcomeKind::parse`] is that guard:
//! it accepts `"ok"`/`"err"` case-insensitively and rejects anything else
//! eagerly, before an outcome exists.
//!
//! Quick example:
//! ```rust
//! use outcome_value::{Outcome, OutcomeKind};
//!
//! assert_eq!(OutcomeKind::parse("OK").unwrap(), OutcomeKind::Ok);
//! assert_eq!(OutcomeKind::Err.name(), "err");
//!
//! let o = Outcome::tagged("err", 404).unwrap();
//! assert!(o.is_err());
//! assert!(Outcome::<i32, i32>::tagged("maybe", 1).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::core::error::{OutcomeError, OutcomeResult};
use crate::core::outcome::Outcome;

/// The discriminant of an [`Outcome`]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutcomeKind {
    Ok,
    Err,
}

impl OutcomeKind {
    /// Get both kinds
    pub const fn all() -> [Self; 2] {
        [Self::Ok, Self::Err]
    }

    /// Check if this is the success kind
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Check if this is the failure kind
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err)
    }

    /// Parse from an untrusted tag string (case-insensitive)
    pub fn parse(tag: &str) -> OutcomeResult<Self> {
        if tag.eq_ignore_ascii_case("ok") {
            Ok(Self::Ok)
        } else if tag.eq_ignore_ascii_case("err") {
            Ok(Self::Err)
        } else {
            Err(OutcomeError::invalid_kind(tag))
        }
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Err => "err",
        }
    }

    /// Get a short type code (useful for serialization)
    pub const fn code(&self) -> char {
        match self {
            Self::Ok => 'o',
            Self::Err => 'e',
        }
    }

    /// Parse from type code
    pub const fn from_code(c: char) -> Option<Self> {
        match c {
            'o' => Some(Self::Ok),
            'e' => Some(Self::Err),
            _ => None,
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutcomeKind {
    type Err = OutcomeError;

    fn from_str(s: &str) -> Result<Self, OutcomeError> {
        Self::parse(s)
    }
}

impl<T> Outcome<T, T> {
    /// Build an outcome from an untrusted tag and a payload.
    ///
    /// Both payload slots share one type here because the tag decides at
    /// runtime which slot receives the payload. An unrecognized tag fails
    /// eagerly with [`OutcomeError::InvalidKind`].
    pub fn tagged(tag: &str, payload: T) -> OutcomeResult<Self> {
        match OutcomeKind::parse(tag)? {
            OutcomeKind::Ok => Ok(Outcome::Ok(payload)),
            OutcomeKind::Err => Ok(Outcome::Err(payload)),
        }
    }
}
