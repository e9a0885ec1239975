#![allow(dead_code)]
use outcome::Outcome;
use std::{cell::Cell, fmt::Debug};

/// Counts how many times a transform built from it was called.
#[derive(Default)]
pub struct Probe {
    calls: Cell<usize>,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `f` so every call is recorded.
    pub fn wrap<'a, A, R>(&'a self, f: impl FnOnce(A) -> R + 'a) -> impl FnOnce(A) -> R + 'a {
        move |a| {
            self.calls.set(self.calls.get() + 1);
            f(a)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// Transform that must never run.
pub fn never<A, R>(_: A) -> R {
    panic!("transform called on the passthrough variant")
}

/// Checks an outcome against the expected variant and payload.
pub struct OutcomeCase<S, F> {
    name: Option<String>,
    outcome: Outcome<S, F>,
}

impl<S, F> OutcomeCase<S, F>
where
    S: PartialEq + Debug,
    F: PartialEq + Debug,
{
    pub fn new(outcome: Outcome<S, F>) -> Self {
        Self {
            name: None,
            outcome,
        }
    }

    pub fn name<T: ToString>(mut self, name: T) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn success(self, expected: S) {
        let name = self.name.unwrap_or_default();
        assert!(self.outcome.is_success(), "test case {}: not a success", name);
        assert!(!self.outcome.is_failure(), "test case {}: is_failure", name);
        assert_eq!(self.outcome.error(), None, "test case {}", name);
        assert_eq!(self.outcome.value(), Some(&expected), "test case {}", name);
    }

    pub fn failure(self, expected: F) {
        let name = self.name.unwrap_or_default();
        assert!(self.outcome.is_failure(), "test case {}: not a failure", name);
        assert!(!self.outcome.is_success(), "test case {}: is_success", name);
        assert_eq!(self.outcome.value(), None, "test case {}", name);
        assert_eq!(self.outcome.error(), Some(&expected), "test case {}", name);
    }
}
