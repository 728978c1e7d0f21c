//! Error values and firing records.
//!
//! This module provides the data that flows through and out of a chain:
//!
//! - [`AnyError`]: the type-erased error value every handler is matched against
//! - [`MessageError`]: the concrete message-only error behind [`AnyError::msg`]
//! - [`Outcome`] / [`OutcomeKind`]: how a firing settled
//! - [`FiringReport`]: an ordered trace of the handlers a firing evaluated
//!
//! # Examples
//!
//! ```
//! use catch_rail::{AnyError, MessageError};
//!
//! let err = AnyError::msg("database connection failed");
//!
//! assert!(err.is::<MessageError>());
//! assert_eq!(
//!     err.downcast_ref::<MessageError>().map(MessageError::message),
//!     Some("database connection failed")
//! );
//! ```
use smallvec::SmallVec;

pub mod any_error;
pub mod message_error;
pub mod outcome;
pub mod report;

pub use any_error::*;
pub use message_error::*;
pub use outcome::*;
pub use report::*;

/// SmallVec-backed collection used for handler lists and report steps.
///
/// Uses inline storage for up to 4 elements, which covers the usual
/// hand-written chain without a heap allocation for the list itself.
pub type HandlerVec<T> = SmallVec<[T; 4]>;
