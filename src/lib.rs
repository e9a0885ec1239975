//! Two-variant outcome type with a small set of combinators.
//!
//! [`Outcome`] holds either a success value or a failure value. Failures are
//! plain data and travel through [`Outcome::map`], [`Outcome::flat_map`] and
//! friends. When the failure side is [`anyhow::Error`] ([`Fallible`]), the
//! outcome can also be built from a fallible closure and turned back into an
//! `anyhow::Result` at call sites that prefer `?`.

pub mod capture;
pub mod outcome;

pub use capture::Fallible;
pub use outcome::Outcome;
