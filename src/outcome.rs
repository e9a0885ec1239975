/// Result of a computation that either produced a value of type `S`
/// or failed with a value of type `F`.
///
/// Every method takes `self` by value or by shared reference, so a
/// constructed outcome is never changed in place. Combinators hand back
/// a new outcome instead.
///
/// ```rust
/// use outcome::Outcome;
///
/// let doubled = Outcome::<i32, String>::success(5).map(|x| x * 2);
/// assert_eq!(doubled.value(), Some(&10));
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<S, F> {
    /// Computed value.
    Success(S),
    /// Reason the computation did not produce a value.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Wraps a computed value.
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Wraps the reason a computation failed.
    pub const fn failure(error: F) -> Self {
        Self::Failure(error)
    }

    /// Returns the success payload, `None` for a failure.
    pub const fn value(&self) -> Option<&S> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure payload, `None` for a success.
    pub const fn error(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(e),
        }
    }

    /// Owned version of [`Outcome::value`].
    pub fn into_value(self) -> Option<S> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure(_) => None,
        }
    }

    /// Owned version of [`Outcome::error`].
    pub fn into_error(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(e),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows both payloads, so combinators can run without consuming `self`.
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Success(v) => Outcome::Success(v),
            Self::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Transforms the success payload, a failure is carried over untouched
    /// and `f` is not called.
    ///
    /// # Panics
    ///
    /// A panic raised by `f` is not caught and unwinds to the caller.
    pub fn map<U, M>(self, f: M) -> Outcome<U, F>
    where
        M: FnOnce(S) -> U,
    {
        match self {
            Self::Success(v) => Outcome::Success(f(v)),
            Self::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Transforms the failure payload, a success is carried over untouched
    /// and `f` is not called.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let loud = Outcome::<i32, String>::failure("bad".into()).map_failure(|e| e.to_uppercase());
    /// assert_eq!(loud.error().map(String::as_str), Some("BAD"));
    /// ```
    ///
    /// # Panics
    ///
    /// A panic raised by `f` is not caught and unwinds to the caller.
    pub fn map_failure<U, M>(self, f: M) -> Outcome<S, U>
    where
        M: FnOnce(F) -> U,
    {
        match self {
            Self::Success(v) => Outcome::Success(v),
            Self::Failure(e) => Outcome::Failure(f(e)),
        }
    }

    /// Chains another step that may itself fail. The outcome returned by `f`
    /// becomes the result as is; a failure short-circuits with its original
    /// error.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, String> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure(format!("{} is odd", x))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).flat_map(half).flat_map(half), Outcome::success(2));
    /// assert_eq!(
    ///     Outcome::success(6).flat_map(half).flat_map(half),
    ///     Outcome::failure("3 is odd".to_string())
    /// );
    /// ```
    ///
    /// # Panics
    ///
    /// A panic raised by `f` is not caught and unwinds to the caller.
    pub fn flat_map<U, M>(self, f: M) -> Outcome<U, F>
    where
        M: FnOnce(S) -> Outcome<U, F>,
    {
        match self {
            Self::Success(v) => f(v),
            Self::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Failure-side counterpart of [`Outcome::flat_map`], lets a failure
    /// recover into a success or turn into a different failure.
    ///
    /// # Panics
    ///
    /// A panic raised by `f` is not caught and unwinds to the caller.
    pub fn flat_map_failure<U, M>(self, f: M) -> Outcome<S, U>
    where
        M: FnOnce(F) -> Outcome<S, U>,
    {
        match self {
            Self::Success(v) => Outcome::Success(v),
            Self::Failure(e) => f(e),
        }
    }

    /// Like [`Outcome::map`], but for transforms that report their own
    /// failure through `Result`. That error goes back to the caller, it is
    /// never folded into the outcome.
    pub fn try_map<U, E, M>(self, f: M) -> Result<Outcome<U, F>, E>
    where
        M: FnOnce(S) -> Result<U, E>,
    {
        match self {
            Self::Success(v) => Ok(Outcome::Success(f(v)?)),
            Self::Failure(e) => Ok(Outcome::Failure(e)),
        }
    }

    /// Returns the success payload, or `default` for a failure.
    pub fn unwrap_or(self, default: S) -> S {
        match self {
            Self::Success(v) => v,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload, or computes one from the failure.
    pub fn unwrap_or_else<M>(self, f: M) -> S
    where
        M: FnOnce(F) -> S,
    {
        match self {
            Self::Success(v) => v,
            Self::Failure(e) => f(e),
        }
    }
}
