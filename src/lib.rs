//! Typed catch/finally dispatch for Rust errors.
//!
//! A chain is a list of closures whose parameter type decides which errors
//! they handle. Feeding an error through the chain runs every matching catch
//! handler in order; a handler can replace the error, pass it on, or suppress
//! it by returning `None`. Finally handlers then run in reverse order against
//! whatever error is left.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `catch_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Reusable Chain
//!
//! ```
//! use catch_rail::{AnyError, CatchChain, MessageError};
//! use std::cell::Cell;
//!
//! let finally_calls = Cell::new(0);
//!
//! let mut chain = CatchChain::new()
//!     .catch(|_: std::io::Error| None)
//!     .finally(|_: &AnyError| finally_calls.set(finally_calls.get() + 1))
//!     .catch(|e: MessageError| Some(AnyError::msg(format!("[handled] {e}"))));
//!
//! let result = chain.fire(AnyError::msg("string")).unwrap();
//! assert_eq!(result.to_string(), "[handled] string");
//! assert_eq!(finally_calls.get(), 1);
//! ```
//!
//! ## Bound Chain
//!
//! ```
//! use catch_rail::{AnyError, BoundChain};
//!
//! let chain = BoundChain::new(AnyError::msg("string"))
//!     .catch(|_: std::io::Error| -> Option<AnyError> { unreachable!() })
//!     .catch(|_: AnyError| None);
//!
//! assert!(chain.error().is_none());
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

/// Bound chain: error first, handlers applied as they are registered
pub mod bound;
/// Reusable catch/finally chain
pub mod chain;
/// Error construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Handler matching and `Result` integration traits
pub mod traits;
/// Error values, outcomes, and firing reports
pub mod types;

pub use bound::BoundChain;
pub use chain::CatchChain;
pub use traits::*;
pub use types::{
    AnyError, BoxedError, FiringReport, HandlerStep, MessageError, Outcome, OutcomeKind, Phase,
    Sources, StepAction,
};

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
