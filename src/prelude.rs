//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use catch_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`any_error!`]
//! - **Types**: [`AnyError`], [`MessageError`], [`CatchChain`], [`BoundChain`], [`Outcome`]
//! - **Traits**: [`ErrorShape`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use catch_rail::prelude::*;
//!
//! fn classify(err: AnyError) -> Option<AnyError> {
//!     CatchChain::new()
//!         .catch(|e: MessageError| {
//!             if e.message().starts_with("retry") { None } else { Some(e.into()) }
//!         })
//!         .fire(err)
//! }
//!
//! assert!(classify(any_error!("retry later")).is_none());
//! assert!(classify(any_error!("fatal")).is_some());
//! ```

// Macros
pub use crate::any_error;

// Core types
pub use crate::bound::BoundChain;
pub use crate::chain::CatchChain;
pub use crate::types::{AnyError, MessageError, Outcome};

// Traits
pub use crate::traits::{ErrorShape, ResultExt};
