//! Handler records: a shape tag plus a boxed, type-erased action.

use alloc::boxed::Box;
use core::fmt;

use crate::traits::error_shape::ShapeTag;
use crate::traits::ErrorShape;
use crate::types::{AnyError, Outcome};

/// Result of evaluating one catch handler against one error.
pub(crate) enum CatchStep {
    /// Shape mismatch; the error is returned untouched.
    Skipped(AnyError),
    /// The handler returned an error (possibly the same one).
    Continued(AnyError),
    /// The handler returned `None`.
    Suppressed,
}

/// Match-and-apply for a single catch handler.
///
/// Shared by [`CatchHandler`] and [`BoundChain::catch`](crate::BoundChain::catch).
///
/// # Panics
///
/// Panics if `P` reports a match but then refuses the conversion. The sealed
/// shapes never do this; it would mean the matcher and the converter disagree.
pub(crate) fn apply_catch<P, F>(error: AnyError, handler: F) -> CatchStep
where
    P: ErrorShape,
    F: FnOnce(P) -> Option<AnyError>,
{
    if !P::matches(&error) {
        return CatchStep::Skipped(error);
    }

    let shaped = match P::from_error(error) {
        Ok(shaped) => shaped,
        Err(error) => panic!(
            "error shape `{}` matched `{error}` but refused to convert it",
            P::shape_name()
        ),
    };

    match handler(shaped) {
        Some(next) => CatchStep::Continued(next),
        None => CatchStep::Suppressed,
    }
}

type CatchAction<'a> = Box<dyn FnMut(AnyError) -> CatchStep + 'a>;
type FinallyAction<'a> = Box<dyn FnMut(Outcome<'_>) + 'a>;

fn finally_action<'a, F>(handler: F) -> FinallyAction<'a>
where
    F: FnMut(Outcome<'_>) + 'a,
{
    Box::new(handler)
}

/// A registered catch handler.
pub(crate) struct CatchHandler<'a> {
    shape: ShapeTag,
    action: CatchAction<'a>,
}

impl<'a> CatchHandler<'a> {
    pub(crate) fn new<P, F>(mut handler: F) -> Self
    where
        P: ErrorShape,
        F: FnMut(P) -> Option<AnyError> + 'a,
    {
        Self {
            shape: ShapeTag::of::<P>(),
            action: Box::new(move |error: AnyError| apply_catch::<P, _>(error, &mut handler)),
        }
    }

    #[inline]
    pub(crate) fn shape_name(&self) -> &'static str {
        self.shape.name()
    }

    #[inline]
    pub(crate) fn apply(&mut self, error: AnyError) -> CatchStep {
        (self.action)(error)
    }
}

impl fmt::Debug for CatchHandler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.shape, f)
    }
}

/// A registered finally handler.
///
/// Typed handlers carry a shape and only run when the final error matches it.
/// Untyped ("always") handlers have no shape and run on every firing.
pub(crate) struct FinallyHandler<'a> {
    shape: Option<ShapeTag>,
    action: FinallyAction<'a>,
}

impl<'a> FinallyHandler<'a> {
    pub(crate) fn typed<P, F>(mut handler: F) -> Self
    where
        P: ErrorShape,
        F: FnMut(&P) + 'a,
    {
        Self {
            shape: Some(ShapeTag::of::<P>()),
            action: finally_action(move |outcome| {
                if let Some(shaped) = outcome.error().and_then(P::from_error_ref) {
                    handler(shaped);
                }
            }),
        }
    }

    pub(crate) fn always<F>(handler: F) -> Self
    where
        F: FnMut(Outcome<'_>) + 'a,
    {
        Self { shape: None, action: finally_action(handler) }
    }

    pub(crate) fn shape_name(&self) -> &'static str {
        self.shape.as_ref().map_or("*", ShapeTag::name)
    }

    /// Runs the handler if its shape admits `outcome`. Returns whether it ran.
    pub(crate) fn run(&mut self, outcome: Outcome<'_>) -> bool {
        if let Some(shape) = &self.shape {
            if !shape.matches(outcome.error()) {
                return false;
            }
        }
        (self.action)(outcome);
        true
    }
}

impl fmt::Debug for FinallyHandler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.shape_name())
    }
}
