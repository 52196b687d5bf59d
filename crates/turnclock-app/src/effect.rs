//! Follow-up actions returned by the reducer.
//!
//! Effects keep the reducer pure: instead of performing work, a transition
//! describes it as a value and the host loop executes it off the critical
//! path. An effect may feed a new event back into the queue, never touching
//! the model directly.

use turnclock_core::LogRecord;

use crate::{ConfirmKind, Event, Model};

/// A follow-up action for the host loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Push another event onto the queue for a future reducer call.
    Emit(Event),
    /// Present a yes/no prompt; the answer returns as [`Event::Confirm`].
    Confirm(ConfirmKind),
    /// Dismiss any overlay and show the main screen.
    RestoreMain,
}

/// The reducer's complete result for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// State after the transition.
    pub model: Model,
    /// Follow-up for the host, if any.
    pub effect: Option<Effect>,
    /// Logbook rows describing the transition, in emission order.
    pub records: Vec<LogRecord>,
}

impl Step {
    /// A transition with no effect and no log output.
    pub fn next(model: Model) -> Self {
        Self { model, effect: None, records: Vec::new() }
    }

    /// Attach an effect to this step.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}
