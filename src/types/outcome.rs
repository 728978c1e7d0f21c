use crate::types::AnyError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a single firing of a [`CatchChain`](crate::CatchChain) settled.
///
/// Finally handlers registered through
/// [`CatchChain::finally_always`](crate::CatchChain::finally_always) receive
/// this value on every firing.
///
/// # Examples
///
/// ```
/// use catch_rail::{AnyError, CatchChain, Outcome};
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let mut chain = CatchChain::new()
///     .catch(|e: AnyError| if e.to_string() == "ignored" { None } else { Some(e) })
///     .finally_always(|outcome: Outcome<'_>| seen.borrow_mut().push(outcome.kind()));
///
/// chain.fire(AnyError::msg("ignored"));
/// chain.fire(AnyError::msg("kept"));
/// drop(chain);
///
/// use catch_rail::OutcomeKind::*;
/// assert_eq!(seen.into_inner(), [Suppressed, Propagated]);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    /// The catch phase finished with an error still present.
    Propagated(&'a AnyError),
    /// A catch handler returned `None`.
    Suppressed,
    /// A catch handler panicked before the catch phase finished. The in-flight
    /// error was owned by that handler and is gone.
    Interrupted,
}

impl<'a> Outcome<'a> {
    /// The final error, if one is still present.
    #[inline]
    pub fn error(&self) -> Option<&'a AnyError> {
        match *self {
            Outcome::Propagated(error) => Some(error),
            Outcome::Suppressed | Outcome::Interrupted => None,
        }
    }

    /// Returns `true` if a catch handler suppressed the error.
    #[inline]
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Outcome::Suppressed)
    }

    /// Returns `true` if a catch handler panicked.
    #[inline]
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Outcome::Interrupted)
    }

    /// Drops the borrowed error, keeping only the discriminant.
    #[inline]
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Propagated(_) => OutcomeKind::Propagated,
            Outcome::Suppressed => OutcomeKind::Suppressed,
            Outcome::Interrupted => OutcomeKind::Interrupted,
        }
    }
}

/// Data-only counterpart of [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutcomeKind {
    /// An error was returned to the caller.
    Propagated,
    /// No error was returned.
    Suppressed,
    /// The catch phase unwound out of a panicking handler.
    Interrupted,
}
