//! Step-by-step record of a single chain firing.

use alloc::borrow::Cow;
use core::fmt::{self, Display};

use crate::types::{HandlerVec, OutcomeKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which half of a chain a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    Catch,
    Finally,
}

/// What a handler did when it was evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepAction {
    /// The handler's shape did not match, so it was not invoked.
    Skipped,
    /// A catch handler returned an error (the same one or a replacement).
    Continued,
    /// A catch handler returned `None`.
    Suppressed,
    /// A finally handler was invoked.
    Ran,
}

/// One handler evaluation inside a [`FiringReport`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HandlerStep {
    pub phase: Phase,
    /// Registration index within the handler's own list.
    pub index: usize,
    /// Type name of the declared parameter shape.
    pub shape: Cow<'static, str>,
    pub action: StepAction,
}

impl Display for HandlerStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.phase {
            Phase::Catch => "catch",
            Phase::Finally => "finally",
        };
        let action = match self.action {
            StepAction::Skipped => "skipped",
            StepAction::Continued => "continued",
            StepAction::Suppressed => "suppressed",
            StepAction::Ran => "ran",
        };
        write!(f, "{phase}[{}] <{}> {action}", self.index, self.shape)
    }
}

/// Ordered trace of every handler evaluated during one firing, produced by
/// [`CatchChain::fire_with_report`](crate::CatchChain::fire_with_report).
///
/// Catch handlers after a suppression are never evaluated and therefore never
/// appear. Finally handlers appear in execution order (reverse registration).
///
/// # Examples
///
/// ```
/// use catch_rail::{AnyError, CatchChain, MessageError, Phase, StepAction};
///
/// let mut chain = CatchChain::new()
///     .catch(|_: std::io::Error| None)
///     .catch(|e: MessageError| Some(e.into()));
///
/// let (result, report) = chain.fire_with_report(AnyError::msg("boom"));
/// assert!(result.is_some());
///
/// let actions: Vec<_> = report.steps().iter().map(|s| (s.phase, s.action)).collect();
/// assert_eq!(
///     actions,
///     [(Phase::Catch, StepAction::Skipped), (Phase::Catch, StepAction::Continued)]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FiringReport {
    steps: HandlerVec<HandlerStep>,
    outcome: Option<OutcomeKind>,
}

impl FiringReport {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record(
        &mut self,
        phase: Phase,
        index: usize,
        shape: &'static str,
        action: StepAction,
    ) {
        self.steps.push(HandlerStep { phase, index, shape: Cow::Borrowed(shape), action });
    }

    #[inline]
    pub(crate) fn settle(&mut self, outcome: OutcomeKind) {
        self.outcome = Some(outcome);
    }

    /// All recorded steps, in evaluation order.
    #[inline]
    pub fn steps(&self) -> &[HandlerStep] {
        &self.steps
    }

    /// Steps of one phase only.
    pub fn phase(&self, phase: Phase) -> impl Iterator<Item = &HandlerStep> + '_ {
        self.steps.iter().filter(move |step| step.phase == phase)
    }

    /// Number of handlers that were actually invoked.
    pub fn invoked(&self) -> usize {
        self.steps.iter().filter(|step| step.action != StepAction::Skipped).count()
    }

    /// How the firing settled. `None` only for a report that was never
    /// attached to a firing.
    #[inline]
    pub fn outcome(&self) -> Option<OutcomeKind> {
        self.outcome
    }
}

impl Display for FiringReport {
    /// One step per line, followed by the outcome.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        match self.outcome {
            Some(outcome) => write!(f, "outcome: {outcome:?}"),
            None => f.write_str("outcome: pending"),
        }
    }
}
