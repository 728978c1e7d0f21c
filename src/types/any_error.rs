//! The opaque error value that flows through catch chains.
//!
//! [`AnyError`] is the "generic error capability": every value that
//! implements [`core::error::Error`] can be lifted into it, and a handler
//! declared over `AnyError` accepts every error. Handlers declared over a
//! concrete type only see errors whose dynamic type is exactly that type.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::error::Error;
use core::fmt::{self, Debug, Display};
use core::ops::Deref;

use crate::types::message_error::MessageError;

/// Boxed, thread-safe error trait object stored inside [`AnyError`].
pub type BoxedError = Box<dyn Error + Send + Sync + 'static>;

/// Type-erased error value carried by [`CatchChain`](crate::CatchChain) and
/// [`BoundChain`](crate::BoundChain).
///
/// `AnyError` does not implement [`Error`] itself. That keeps it distinct from
/// every concrete error type, which is what allows a handler declared as
/// `|e: AnyError|` to mean "any error" while `|e: MyError|` means "exactly
/// `MyError`".
///
/// # Examples
///
/// ```
/// use catch_rail::AnyError;
/// use std::io;
///
/// let err = AnyError::new(io::Error::new(io::ErrorKind::NotFound, "missing"));
/// assert!(err.is::<io::Error>());
/// assert_eq!(err.to_string(), "missing");
///
/// let io_err: io::Error = err.downcast().unwrap();
/// assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
/// ```
pub struct AnyError {
    inner: BoxedError,
}

impl AnyError {
    /// Wraps a concrete error value.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { inner: Box::new(error) }
    }

    /// Creates a plain message error, backed by [`MessageError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_rail::{AnyError, MessageError};
    ///
    /// let err = AnyError::msg("connection refused");
    /// assert!(err.is::<MessageError>());
    /// assert_eq!(err.to_string(), "connection refused");
    /// ```
    #[inline]
    pub fn msg<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::new(MessageError::new(message))
    }

    /// Adopts an already boxed error without boxing it again, so downcasts
    /// still see the original concrete type.
    #[inline]
    pub fn from_boxed(error: BoxedError) -> Self {
        Self { inner: error }
    }

    /// Returns `true` if the dynamic type of the error is exactly `E`.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.inner.is::<E>()
    }

    /// Borrows the error as `E` if that is its dynamic type.
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Mutably borrows the error as `E` if that is its dynamic type.
    #[inline]
    pub fn downcast_mut<E>(&mut self) -> Option<&mut E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_mut::<E>()
    }

    /// Takes the error out as `E`, handing `self` back unchanged on mismatch.
    #[inline]
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: Error + 'static,
    {
        match self.inner.downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(inner) => Err(Self { inner }),
        }
    }

    /// Returns the underlying trait object.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Consumes the wrapper, returning the boxed trait object.
    #[inline]
    pub fn into_boxed(self) -> BoxedError {
        self.inner
    }

    /// Iterates over this error followed by each of its `source()`s.
    ///
    /// # Examples
    ///
    /// ```
    /// use catch_rail::AnyError;
    /// use std::{fmt, io};
    ///
    /// #[derive(Debug)]
    /// struct Outer(io::Error);
    ///
    /// impl fmt::Display for Outer {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str("outer")
    ///     }
    /// }
    ///
    /// impl std::error::Error for Outer {
    ///     fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    ///         Some(&self.0)
    ///     }
    /// }
    ///
    /// let err = AnyError::new(Outer(io::Error::other("inner")));
    /// let messages: Vec<String> = err.sources().map(|e| e.to_string()).collect();
    /// assert_eq!(messages, ["outer", "inner"]);
    /// ```
    #[inline]
    pub fn sources(&self) -> Sources<'_> {
        let first: &(dyn Error + 'static) = &*self.inner;
        Sources { next: Some(first) }
    }

    /// Returns the last error in the `source()` chain.
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        let mut root: &(dyn Error + 'static) = &*self.inner;
        while let Some(next) = root.source() {
            root = next;
        }
        root
    }
}

impl<E> From<E> for AnyError
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<AnyError> for BoxedError {
    #[inline]
    fn from(error: AnyError) -> Self {
        error.inner
    }
}

impl Deref for AnyError {
    type Target = dyn Error + Send + Sync + 'static;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for AnyError {
    #[inline]
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }
}

impl Debug for AnyError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

impl Display for AnyError {
    /// Standard formatting prints the error message only.
    ///
    /// The alternate form (`{:#}`) appends every source:
    ///
    /// ```text
    /// outer
    /// Caused by:
    ///   - inner
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)?;

        if f.alternate() {
            let mut causes = self.sources().skip(1).peekable();
            if causes.peek().is_some() {
                f.write_str("\nCaused by:")?;
                for cause in causes {
                    write!(f, "\n  - {cause}")?;
                }
            }
        }
        Ok(())
    }
}

/// Iterator over an error and its `source()` chain.
///
/// Created by [`AnyError::sources`].
#[derive(Clone)]
pub struct Sources<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Sources<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
