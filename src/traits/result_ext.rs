//! Extension trait for routing `Result` errors through a chain.
//!
//! This module provides [`ResultExt`], which feeds the `Err` side of a
//! `Result` into a [`CatchChain`] or [`BoundChain`] without a manual `match`.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{AnyError, CatchChain, ResultExt};
//! use std::io;
//!
//! let mut chain = CatchChain::new().catch(|e: io::Error| match e.kind() {
//!     io::ErrorKind::NotFound => None,
//!     _ => Some(e.into()),
//! });
//!
//! let missing: Result<String, io::Error> = Err(io::ErrorKind::NotFound.into());
//! assert!(matches!(missing.catch_with(&mut chain), Ok(None)));
//!
//! let denied: Result<String, io::Error> = Err(io::ErrorKind::PermissionDenied.into());
//! assert!(denied.catch_with(&mut chain).is_err());
//! ```

use crate::bound::BoundChain;
use crate::chain::CatchChain;
use crate::types::AnyError;

/// Extension trait connecting `Result` to catch chains.
pub trait ResultExt<T, E> {
    /// Fires `chain` with the error, if any.
    ///
    /// - `Ok(value)` becomes `Ok(Some(value))` and the chain is not fired.
    /// - An error the chain suppresses becomes `Ok(None)`.
    /// - An error the chain propagates becomes `Err` with the chain's result.
    fn catch_with(self, chain: &mut CatchChain<'_>) -> Result<Option<T>, AnyError>;

    /// Starts a [`BoundChain`] from the error side, discarding any `Ok` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_rail::{AnyError, ResultExt};
    ///
    /// let failed: Result<(), std::fmt::Error> = Err(std::fmt::Error);
    /// let settled = failed.catching().catch(|_: std::fmt::Error| None);
    ///
    /// assert!(settled.is_suppressed());
    /// ```
    fn catching(self) -> BoundChain;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<AnyError>,
{
    fn catch_with(self, chain: &mut CatchChain<'_>) -> Result<Option<T>, AnyError> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(error) => match chain.fire(error) {
                Some(error) => Err(error),
                None => Ok(None),
            },
        }
    }

    #[inline]
    fn catching(self) -> BoundChain {
        BoundChain::from_result(self)
    }
}
