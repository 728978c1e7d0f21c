//! Core traits for handler matching and `Result` integration.
//!
//! - [`ErrorShape`]: the type-match rule deciding which handlers see an error
//! - [`ResultExt`]: routes the `Err` side of a `Result` through a chain
//!
//! # Examples
//!
//! ```
//! use catch_rail::traits::ErrorShape;
//! use catch_rail::{AnyError, MessageError};
//!
//! let err = AnyError::msg("boom");
//! let shaped = <MessageError as ErrorShape>::from_error_ref(&err);
//!
//! assert_eq!(shaped.map(MessageError::message), Some("boom"));
//! ```

pub mod error_shape;
pub mod result_ext;

pub use error_shape::ErrorShape;
pub use result_ext::ResultExt;
