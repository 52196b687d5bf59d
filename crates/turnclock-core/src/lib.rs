//! Core domain types for turnclock.
//!
//! Everything here is independent of the UI framework and of the event loop:
//! the built-in rule catalog, the persisted options record, color palettes,
//! the JSON options store, and the CSV action logbook.
//!
//! # Components
//!
//! - [`Ruleset`]: a named rule preset (phase list plus turn-structure flag)
//! - [`Options`]: the persisted configuration record
//! - [`Palette`]/[`Rgb`]: resolved color sets, terminal-framework agnostic
//! - [`load_options`]/[`save_options`]: tolerant JSON persistence
//! - [`Logbook`]/[`LogRecord`]: append-only CSV log of game actions

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod logbook;
mod options;
mod palette;
mod rules;
mod store;

pub use error::{LogbookError, StoreError};
pub use logbook::{LogRecord, Logbook};
pub use options::{MAX_PLAYERS, Options, TIME_FORMAT_24H, TIME_FORMAT_AMPM};
pub use palette::{Palette, Rgb};
pub use rules::Ruleset;
pub use store::{load_options, save_options};
