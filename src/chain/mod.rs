//! Reusable catch/finally chain.
//!
//! A [`CatchChain`] is built once from typed handlers and fired any number of
//! times. Each firing runs the catch phase in registration order, then the
//! finally phase in reverse registration order.
//!
//! # Handler shapes
//!
//! Handlers are plain closures; the closure's parameter type decides which
//! errors it sees (see [`ErrorShape`]). Handler shapes are checked by the
//! compiler when the handler is registered. A catch handler takes exactly one
//! error-shaped argument and returns `Option<AnyError>`:
//!
//! ```compile_fail
//! use catch_rail::{AnyError, CatchChain};
//!
//! // Two parameters.
//! let _ = CatchChain::new().catch(|e: AnyError, extra: u32| Some(e));
//! ```
//!
//! ```compile_fail
//! use catch_rail::CatchChain;
//!
//! // The parameter is not an error.
//! let _ = CatchChain::new().catch(|code: i32| None);
//! ```
//!
//! ```compile_fail
//! use catch_rail::{AnyError, CatchChain};
//!
//! // The return value is not an optional error.
//! let _ = CatchChain::new().catch(|e: AnyError| 0);
//! ```
//!
//! A finally handler borrows one error-shaped argument and returns nothing:
//!
//! ```compile_fail
//! use catch_rail::{AnyError, CatchChain};
//!
//! let _ = CatchChain::new().finally(|e: &AnyError| Some(e.to_string()));
//! ```

use core::fmt;

use crate::macros::chain_trace;
use crate::traits::ErrorShape;
use crate::types::{AnyError, FiringReport, HandlerVec, Outcome};

mod guard;
pub(crate) mod handler;

use guard::FinallyGuard;
use handler::{CatchHandler, FinallyHandler};

/// A reusable, declarative catch/finally chain.
///
/// Handlers may borrow from their environment for `'a`; the chain can then be
/// fired repeatedly while those borrows are alive.
///
/// # Examples
///
/// ```
/// use catch_rail::{AnyError, CatchChain, MessageError};
/// use std::cell::Cell;
/// use std::io;
///
/// let cleanups = Cell::new(0);
///
/// let mut chain = CatchChain::new()
///     .catch(|e: io::Error| {
///         // I/O failures are handled here and go no further.
///         let _ = e;
///         None
///     })
///     .finally(|_: &AnyError| cleanups.set(cleanups.get() + 1))
///     .catch(|e: MessageError| Some(AnyError::msg(format!("wrapped: {e}"))));
///
/// let result = chain.fire(AnyError::msg("boom"));
/// assert_eq!(result.unwrap().to_string(), "wrapped: boom");
///
/// // The same chain fires again.
/// assert!(chain.fire(io::Error::other("disk")).is_none());
///
/// drop(chain);
/// // The finally handler saw the first (propagated) error only; a suppressed
/// // firing has no error to match.
/// assert_eq!(cleanups.get(), 1);
/// ```
#[must_use]
pub struct CatchChain<'a> {
    catch: HandlerVec<CatchHandler<'a>>,
    finally: HandlerVec<FinallyHandler<'a>>,
}

impl<'a> CatchChain<'a> {
    /// Creates an empty chain. Firing an empty chain returns the input error.
    #[inline]
    pub fn new() -> Self {
        Self { catch: HandlerVec::new(), finally: HandlerVec::new() }
    }

    /// Registers a catch handler.
    ///
    /// The handler runs when the current error matches its parameter type `P`.
    /// Returning `Some(error)` continues the chain with that error (the same
    /// one or a replacement); returning `None` suppresses it and ends the catch
    /// phase for this firing.
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_rail::{AnyError, CatchChain};
    ///
    /// let mut chain = CatchChain::new()
    ///     .catch(|e: AnyError| Some(AnyError::msg(format!("first: {e}"))))
    ///     .catch(|e: AnyError| Some(AnyError::msg(format!("second: {e}"))));
    ///
    /// let result = chain.fire(AnyError::msg("boom")).unwrap();
    /// assert_eq!(result.to_string(), "second: first: boom");
    /// ```
    #[inline]
    pub fn catch<P, F>(mut self, handler: F) -> Self
    where
        P: ErrorShape,
        F: FnMut(P) -> Option<AnyError> + 'a,
    {
        self.catch.push(CatchHandler::new(handler));
        chain_trace!(shape = P::shape_name(), position = self.catch.len() - 1, "catch registered");
        self
    }

    /// Registers a finally handler.
    ///
    /// Finally handlers run after the catch phase, in reverse registration
    /// order, and only when the *final* error matches their parameter type
    /// `P`. A suppressed firing has no final error, so typed finally handlers
    /// (including `&AnyError` ones) do not run for it; use
    /// [`finally_always`](Self::finally_always) to observe every firing.
    #[inline]
    pub fn finally<P, F>(mut self, handler: F) -> Self
    where
        P: ErrorShape,
        F: FnMut(&P) + 'a,
    {
        self.finally.push(FinallyHandler::typed(handler));
        chain_trace!(shape = P::shape_name(), position = self.finally.len() - 1, "finally registered");
        self
    }

    /// Registers an ungated finally handler that runs on every firing.
    ///
    /// It shares the finally list with [`finally`](Self::finally), so its
    /// position in the reverse-order run follows registration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_rail::{AnyError, CatchChain, Outcome};
    /// use std::cell::Cell;
    ///
    /// let suppressed = Cell::new(false);
    /// let mut chain = CatchChain::new()
    ///     .catch(|_: AnyError| None)
    ///     .finally_always(|outcome: Outcome<'_>| suppressed.set(outcome.is_suppressed()));
    ///
    /// assert!(chain.fire(AnyError::msg("gone")).is_none());
    /// assert!(suppressed.get());
    /// ```
    #[inline]
    pub fn finally_always<F>(mut self, handler: F) -> Self
    where
        F: FnMut(Outcome<'_>) + 'a,
    {
        self.finally.push(FinallyHandler::always(handler));
        chain_trace!(position = self.finally.len() - 1, "finally_always registered");
        self
    }

    /// Runs one firing: the catch phase, then the finally phase.
    ///
    /// Returns the error left after the catch phase, or `None` if a catch
    /// handler suppressed it. Finally handlers run even if a catch handler
    /// panics; the panic then continues to the caller. With the `std` feature
    /// a panicking finally handler does not stop the others, and its panic is
    /// re-raised once they have run.
    #[inline]
    pub fn fire<E>(&mut self, error: E) -> Option<AnyError>
    where
        E: Into<AnyError>,
    {
        self.dispatch(error.into(), None)
    }

    /// Like [`fire`](Self::fire), also returning a step-by-step
    /// [`FiringReport`].
    #[inline]
    pub fn fire_with_report<E>(&mut self, error: E) -> (Option<AnyError>, FiringReport)
    where
        E: Into<AnyError>,
    {
        let mut report = FiringReport::new();
        let result = self.dispatch(error.into(), Some(&mut report));
        (result, report)
    }

    fn dispatch(&mut self, error: AnyError, report: Option<&mut FiringReport>) -> Option<AnyError> {
        let mut slot = Some(error);
        {
            let mut guard = FinallyGuard::arm(&mut self.finally, &mut slot, report);
            guard.catch_phase(&mut self.catch);
        }
        slot
    }

    /// Number of registered catch handlers.
    #[inline]
    pub fn catch_len(&self) -> usize {
        self.catch.len()
    }

    /// Number of registered finally handlers, typed and always.
    #[inline]
    pub fn finally_len(&self) -> usize {
        self.finally.len()
    }

    /// Returns `true` if no handler of either kind is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.catch.is_empty() && self.finally.is_empty()
    }
}

impl Default for CatchChain<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CatchChain<'_> {
    /// Lists the declared shape of every handler, in registration order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatchChain")
            .field("catch", &self.catch.as_slice())
            .field("finally", &self.finally.as_slice())
            .finish()
    }
}
