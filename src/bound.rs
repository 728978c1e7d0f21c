//! Bound chain: the error comes first, handlers apply as they are added.
//!
//! [`BoundChain`] reads like an inline `try`/`catch` block. Every
//! [`catch`](BoundChain::catch) call immediately matches its handler against
//! the currently held error and, on a match, replaces the held error with the
//! handler's result. Once a handler suppresses the error, later `catch` calls
//! do nothing. There is no finally phase in this variant.

use crate::chain::handler::{apply_catch, CatchStep};
use crate::macros::chain_trace;
use crate::traits::ErrorShape;
use crate::types::AnyError;

/// An error bound at construction, consumed one `catch` at a time.
///
/// # Examples
///
/// ```
/// use catch_rail::{AnyError, BoundChain, MessageError};
/// use std::io;
///
/// let result = BoundChain::new(AnyError::msg("string"))
///     .catch(|_: io::Error| -> Option<AnyError> {
///         unreachable!("a message error is not an io::Error")
///     })
///     .catch(|e: MessageError| Some(AnyError::msg(format!("handled {e}"))))
///     .into_error();
///
/// assert_eq!(result.unwrap().to_string(), "handled string");
/// ```
#[must_use]
#[derive(Debug)]
pub struct BoundChain {
    error: Option<AnyError>,
}

impl BoundChain {
    /// Binds an error.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Into<AnyError>,
    {
        Self { error: Some(error.into()) }
    }

    /// Binds the error side of a `Result`. An `Ok` starts out settled, so
    /// every `catch` is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_rail::{AnyError, BoundChain};
    ///
    /// let ok: Result<u32, std::io::Error> = Ok(7);
    /// let chain = BoundChain::from_result(ok)
    ///     .catch(|_: AnyError| -> Option<AnyError> { unreachable!() });
    ///
    /// assert!(chain.error().is_none());
    /// ```
    #[inline]
    pub fn from_result<T, E>(result: Result<T, E>) -> Self
    where
        E: Into<AnyError>,
    {
        Self { error: result.err().map(Into::into) }
    }

    /// Applies a catch handler right away.
    ///
    /// If an error is held and matches `P`, the handler runs and its return
    /// value becomes the held error (`None` suppresses it). Otherwise nothing
    /// happens and the handler is dropped uncalled.
    #[inline]
    pub fn catch<P, F>(mut self, handler: F) -> Self
    where
        P: ErrorShape,
        F: FnOnce(P) -> Option<AnyError>,
    {
        let Some(error) = self.error.take() else {
            return self;
        };

        self.error = match apply_catch::<P, F>(error, handler) {
            CatchStep::Skipped(error) => {
                chain_trace!(shape = P::shape_name(), "bound catch skipped");
                Some(error)
            },
            CatchStep::Continued(error) => {
                chain_trace!(shape = P::shape_name(), "bound catch continued");
                Some(error)
            },
            CatchStep::Suppressed => {
                chain_trace!(shape = P::shape_name(), "bound catch suppressed");
                None
            },
        };
        self
    }

    /// The currently held error, or `None` once suppressed.
    #[inline]
    pub fn error(&self) -> Option<&AnyError> {
        self.error.as_ref()
    }

    /// Returns `true` if no error is held.
    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.error.is_none()
    }

    /// Consumes the chain, returning the held error.
    #[inline]
    pub fn into_error(self) -> Option<AnyError> {
        self.error
    }

    /// Consumes the chain into `Ok(())` when suppressed, or `Err` with the held
    /// error.
    #[inline]
    pub fn into_result(self) -> Result<(), AnyError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl From<AnyError> for BoundChain {
    #[inline]
    fn from(error: AnyError) -> Self {
        Self { error: Some(error) }
    }
}
