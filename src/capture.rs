//! Bridge between `anyhow`-style error propagation and [`Outcome`].
//!
//! Only outcomes whose failure side is [`anyhow::Error`] get these methods.
//! Other failure types keep their typed channel and have to go through
//! [`Outcome::map`] and [`Outcome::flat_map`]:
//!
//! ```compile_fail
//! use outcome::Outcome;
//!
//! let typed: Outcome<i32, String> = Outcome::failure("bad".into());
//! let _ = typed.get();
//! ```
//!
//! [`Fallible::catching`] and [`Fallible::get`] are the only conversions
//! between `Result` and [`Outcome`]. A typed failure cannot be turned into an
//! `Err` with `?`:
//!
//! ```compile_fail
//! use outcome::Outcome;
//!
//! fn load() -> Result<i32, String> {
//!     let typed: Outcome<i32, String> = Outcome::failure("bad".into());
//!     let v: Result<i32, String> = typed.into();
//!     v
//! }
//! ```
//!
//! nor can a typed `Err` be captured without going through `catching`:
//!
//! ```compile_fail
//! use outcome::Outcome;
//!
//! let typed: Outcome<i32, String> = Err("bad".to_string()).into();
//! ```

use log::debug;

use crate::outcome::Outcome;

/// Outcome whose failure can be any error.
pub type Fallible<S> = Outcome<S, anyhow::Error>;

impl<S> Outcome<S, anyhow::Error> {
    /// Runs `f` once and records what it returned. An `Err` is converted into
    /// [`anyhow::Error`] and stored as the failure.
    ///
    /// ```rust
    /// use outcome::Fallible;
    ///
    /// let port = Fallible::catching(|| "8080".parse::<u16>());
    /// assert_eq!(port.value(), Some(&8080));
    ///
    /// let port = Fallible::catching(|| "http".parse::<u16>());
    /// assert!(port.is_failure());
    /// ```
    pub fn catching<E, C>(f: C) -> Self
    where
        C: FnOnce() -> Result<S, E>,
        E: Into<anyhow::Error>,
    {
        match f() {
            Ok(v) => Self::Success(v),
            Err(e) => {
                let e = e.into();
                debug!("Outcome::catching - captured failure: {:#}", e);
                Self::Failure(e)
            }
        }
    }

    /// Returns the value, or hands the stored error back so it can be
    /// propagated with `?`.
    pub fn get(self) -> anyhow::Result<S> {
        match self {
            Self::Success(v) => Ok(v),
            Self::Failure(e) => {
                debug!("Outcome::get - returning stored failure: {:#}", e);
                Err(e)
            }
        }
    }

    /// Like [`Outcome::map`], but `f` may fail and its error becomes the new
    /// failure. An existing failure is passed through and `f` is not called.
    pub fn map_throws<U, E, M>(self, f: M) -> Fallible<U>
    where
        M: FnOnce(S) -> Result<U, E>,
        E: Into<anyhow::Error>,
    {
        match self {
            Self::Success(v) => Fallible::catching(|| f(v)),
            Self::Failure(e) => Outcome::Failure(e),
        }
    }
}
