//! Ergonomic macros for building [`AnyError`](crate::AnyError) values.
//!
//! - [`macro@crate::any_error`] - Formats a message into an
//!   [`AnyError`](crate::AnyError) backed by [`MessageError`](crate::MessageError),
//!   or converts an existing error value.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{any_error, BoundChain, MessageError};
//!
//! let attempt = 3;
//! let result = BoundChain::new(any_error!("attempt {} failed", attempt))
//!     .catch(|e: MessageError| Some(any_error!("giving up: {e}")))
//!     .into_error();
//!
//! assert_eq!(result.unwrap().to_string(), "giving up: attempt 3 failed");
//! ```

/// Creates an [`AnyError`](crate::AnyError).
///
/// # Syntax
///
/// - `any_error!("literal")` / `any_error!("format {}", args)` - a
///   [`MessageError`](crate::MessageError) with the formatted text
/// - `any_error!(expr)` - converts any `Error + Send + Sync + 'static` value
///
/// # Examples
///
/// ```
/// use catch_rail::{any_error, MessageError};
/// use std::io;
///
/// let user_id = 42;
/// let err = any_error!("user {user_id} not found");
/// assert!(err.is::<MessageError>());
/// assert_eq!(err.to_string(), "user 42 not found");
///
/// let err = any_error!(io::Error::other("disk"));
/// assert!(err.is::<io::Error>());
/// ```
#[macro_export]
macro_rules! any_error {
    ($msg:literal $(,)?) => {
        $crate::AnyError::msg($crate::__private::format!($msg))
    };
    ($fmt:literal, $($arg:tt)+) => {
        $crate::AnyError::msg($crate::__private::format!($fmt, $($arg)+))
    };
    ($err:expr $(,)?) => {
        $crate::AnyError::from($err)
    };
}

/// Emits a `trace`-level event when the `tracing` feature is enabled.
macro_rules! chain_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)+);
        }
    };
}

/// Emits a `debug`-level event when the `tracing` feature is enabled.
macro_rules! chain_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)+);
        }
    };
}

pub(crate) use chain_debug;
pub(crate) use chain_trace;
