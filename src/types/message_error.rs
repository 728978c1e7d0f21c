use alloc::borrow::Cow;
use core::fmt::{self, Display};

/// A plain, message-only error.
///
/// This is the concrete type behind [`AnyError::msg`](crate::AnyError::msg)
/// and the [`any_error!`](crate::any_error) macro, so a handler declared as
/// `|e: MessageError|` catches exactly those errors.
///
/// # Examples
///
/// ```
/// use catch_rail::MessageError;
///
/// let err = MessageError::new("disk full");
/// assert_eq!(err.message(), "disk full");
/// assert_eq!(err.to_string(), "disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageError {
    message: Cow<'static, str>,
}

impl MessageError {
    /// Creates a message error from a static or owned string.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: message.into() }
    }

    /// Returns the message text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for MessageError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for MessageError {}
