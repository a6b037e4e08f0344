#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]
pub mod catch;
pub mod core;

// Re-export core types
pub use crate::core::{
    error::{OutcomeError, OutcomeResult},
    kind::OutcomeKind,
    outcome::Outcome,
};

// The canonical ergonomic entry points: `Ok(x)` / `Err(e)` build an Outcome
// directly, mirroring the factories on the type itself.
pub use crate::core::outcome::Outcome::{Err, Ok};

pub use crate::catch::{CaughtPanic, catch};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{CaughtPanic, Outcome, OutcomeError, OutcomeKind, OutcomeResult, catch};
    pub use crate::{Err, Ok};
}
