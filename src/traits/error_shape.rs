//! Type matching between a runtime error and a handler's declared parameter.
//!
//! A handler's parameter type is its *shape*. The set of shapes is closed:
//!
//! - [`AnyError`] is the generic error capability and matches every error.
//! - Any concrete `E: Error + Send + Sync + 'static` matches an error only when
//!   the error's dynamic type is exactly `E`.
//!
//! There is no structural matching and no matching on field values. An
//! absent error (after a catch handler suppressed it) matches no shape at all,
//! including [`AnyError`].
//!
//! # Examples
//!
//! ```
//! use catch_rail::{AnyError, ErrorShape, MessageError};
//! use std::io;
//!
//! let err = AnyError::msg("plain");
//!
//! assert!(<AnyError as ErrorShape>::matches(&err));
//! assert!(<MessageError as ErrorShape>::matches(&err));
//! assert!(!<io::Error as ErrorShape>::matches(&err));
//! ```

use core::error::Error;

use crate::types::AnyError;

mod private {
    pub trait Sealed {}

    impl Sealed for crate::types::AnyError {}
    impl<E> Sealed for E where E: core::error::Error + Send + Sync + 'static {}
}

/// A type that a catch or finally handler may declare as its parameter.
///
/// This trait is sealed; it is implemented for [`AnyError`] and for every
/// `E: Error + Send + Sync + 'static`.
pub trait ErrorShape: private::Sealed + Sized + 'static {
    /// Returns `true` if `error` can be handed to a handler of this shape.
    fn matches(error: &AnyError) -> bool;

    /// Converts the error into this shape, handing it back on mismatch.
    fn from_error(error: AnyError) -> Result<Self, AnyError>;

    /// Borrows the error as this shape.
    fn from_error_ref(error: &AnyError) -> Option<&Self>;

    /// Human-readable name of the shape, used in logs and reports.
    #[inline]
    fn shape_name() -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl ErrorShape for AnyError {
    #[inline]
    fn matches(_: &AnyError) -> bool {
        true
    }

    #[inline]
    fn from_error(error: AnyError) -> Result<Self, AnyError> {
        Ok(error)
    }

    #[inline]
    fn from_error_ref(error: &AnyError) -> Option<&Self> {
        Some(error)
    }
}

impl<E> ErrorShape for E
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn matches(error: &AnyError) -> bool {
        error.is::<E>()
    }

    #[inline]
    fn from_error(error: AnyError) -> Result<Self, AnyError> {
        error.downcast::<E>()
    }

    #[inline]
    fn from_error_ref(error: &AnyError) -> Option<&Self> {
        error.downcast_ref::<E>()
    }
}

/// Shape tag stored next to each boxed handler: the declared type's name and
/// its matcher, captured once at registration.
#[derive(Clone, Copy)]
pub(crate) struct ShapeTag {
    name: &'static str,
    matcher: fn(&AnyError) -> bool,
}

impl ShapeTag {
    #[inline]
    pub(crate) fn of<P: ErrorShape>() -> Self {
        Self { name: P::shape_name(), matcher: P::matches }
    }

    #[inline]
    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    /// An absent error never matches.
    #[inline]
    pub(crate) fn matches(&self, error: Option<&AnyError>) -> bool {
        error.is_some_and(|error| (self.matcher)(error))
    }
}

impl core::fmt::Debug for ShapeTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name)
    }
}
