//! Test harness for the turn clock state machine.
//!
//! Provides the invariant registry property tests and fuzz targets run
//! after every transition, plus proptest strategies for generating event
//! sequences and starting models.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod invariants;
mod strategy;

pub use invariants::{
    Invariant, InvariantRegistry, InvariantResult, OptionsShape, PhaseInBounds, SingleTurnHolder,
    StatusCoherence, TotalIsSum, Violation,
};
pub use strategy::{event_strategy, key_strategy, model_strategy};
