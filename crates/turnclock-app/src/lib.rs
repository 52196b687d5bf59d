//! Pure application layer for the turn clock.
//!
//! The state machine lives here: [`Model`] is the single source of truth,
//! [`Event`] the closed set of inputs, and [`update`] the reducer mapping
//! one to the other. Nothing in this crate performs I/O or touches a
//! terminal, which keeps every transition testable as a plain function call.
//!
//! # Components
//!
//! - [`Model`]: players, phases, status, screen, options
//! - [`Event`]/[`ConfirmKind`]: everything that can happen to a session
//! - [`update`]: the reducer, one event in, one [`Step`] out
//! - [`Effect`]: follow-ups the host loop runs off the critical path
//! - [`KeyInput`]/[`map_key`]: terminal-agnostic key binding lookup

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod effect;
mod event;
mod input;
mod model;
mod update;

pub use effect::{Effect, Step};
pub use event::{ConfirmKind, Event};
pub use input::{KeyInput, map_key};
pub use model::{GameStatus, LogEntry, Model, Player, Screen, TICK_UNIT};
pub use update::update;
