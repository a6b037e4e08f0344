//! Lossless interop with `std::result::Result`
//!
//! An [`Outcome`] is structurally a result, so conversion in either
//! direction moves the payload without touching it. This keeps the crate a
//! drop-in bridge: take a std result in, run the combinator algebra, hand a
//! std result back out.

use crate::core::outcome::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(e) => Err(e),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Convert into a std result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Build from a std result
    #[inline]
    pub fn from_result(res: Result<T, E>) -> Self {
        res.into()
    }
}
