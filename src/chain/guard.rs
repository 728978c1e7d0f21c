//! Scope guard that runs the finally phase of a firing.
//!
//! The guard is armed before the first catch handler runs and does its work
//! in `Drop`, so the finally phase runs whether the catch phase returns
//! normally or unwinds out of a panicking handler.
//!
//! With the `std` feature every finally handler is isolated with
//! `catch_unwind`: a panicking finally handler does not stop the handlers
//! registered before it. The first payload is re-raised once the phase is
//! over, unless the thread is already unwinding.

#[cfg(feature = "std")]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use core::any::Any;

use crate::chain::handler::{CatchHandler, CatchStep, FinallyHandler};
use crate::macros::{chain_debug, chain_trace};
use crate::types::{AnyError, FiringReport, Outcome, Phase, StepAction};

pub(crate) struct FinallyGuard<'g, 'a> {
    finally: &'g mut [FinallyHandler<'a>],
    slot: &'g mut Option<AnyError>,
    report: Option<&'g mut FiringReport>,
    completed: bool,
}

impl<'g, 'a> FinallyGuard<'g, 'a> {
    #[inline]
    pub(crate) fn arm(
        finally: &'g mut [FinallyHandler<'a>],
        slot: &'g mut Option<AnyError>,
        report: Option<&'g mut FiringReport>,
    ) -> Self {
        Self { finally, slot, report, completed: false }
    }

    /// Runs the catch phase in registration order, stopping at the first
    /// suppression.
    pub(crate) fn catch_phase(&mut self, catch: &mut [CatchHandler<'a>]) {
        for (index, handler) in catch.iter_mut().enumerate() {
            let Some(error) = self.slot.take() else {
                break;
            };

            let (next, action) = match handler.apply(error) {
                CatchStep::Skipped(error) => (Some(error), StepAction::Skipped),
                CatchStep::Continued(error) => (Some(error), StepAction::Continued),
                CatchStep::Suppressed => (None, StepAction::Suppressed),
            };
            chain_trace!(
                phase = "catch",
                index,
                shape = handler.shape_name(),
                action = ?action,
                "catch handler evaluated"
            );

            *self.slot = next;
            if let Some(report) = self.report.as_deref_mut() {
                report.record(Phase::Catch, index, handler.shape_name(), action);
            }
        }
        self.completed = true;
    }

    fn finally_phase(&mut self) {
        let outcome = if !self.completed {
            Outcome::Interrupted
        } else {
            match &*self.slot {
                Some(error) => Outcome::Propagated(error),
                None => Outcome::Suppressed,
            }
        };
        if outcome.is_interrupted() {
            chain_debug!(handlers = self.finally.len(), "catch phase interrupted, running finally");
        }

        let mut pending = PanicSlot::default();
        for (index, handler) in self.finally.iter_mut().enumerate().rev() {
            let ran = pending.run(handler, outcome);
            let action = if ran { StepAction::Ran } else { StepAction::Skipped };
            chain_trace!(
                phase = "finally",
                index,
                shape = handler.shape_name(),
                action = ?action,
                "finally handler evaluated"
            );

            if let Some(report) = self.report.as_deref_mut() {
                report.record(Phase::Finally, index, handler.shape_name(), action);
            }
        }

        if let Some(report) = self.report.as_deref_mut() {
            report.settle(outcome.kind());
        }
        pending.resume();
    }
}

/// Holds the first panic raised by a finally handler.
#[derive(Default)]
struct PanicSlot {
    #[cfg(feature = "std")]
    payload: Option<Box<dyn Any + Send + 'static>>,
}

impl PanicSlot {
    #[cfg(feature = "std")]
    fn run(&mut self, handler: &mut FinallyHandler<'_>, outcome: Outcome<'_>) -> bool {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handler.run(outcome))) {
            Ok(ran) => ran,
            Err(payload) => {
                chain_debug!(shape = handler.shape_name(), "finally handler panicked");
                self.payload.get_or_insert(payload);
                true
            },
        }
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    fn run(&mut self, handler: &mut FinallyHandler<'_>, outcome: Outcome<'_>) -> bool {
        handler.run(outcome)
    }

    /// Re-raises the stored panic unless the thread is already unwinding.
    #[cfg(feature = "std")]
    fn resume(self) {
        if let Some(payload) = self.payload {
            if !std::thread::panicking() {
                std::panic::resume_unwind(payload);
            }
        }
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    fn resume(self) {}
}

impl Drop for FinallyGuard<'_, '_> {
    fn drop(&mut self) {
        self.finally_phase();
    }
}
