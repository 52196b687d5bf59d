//! Terminal shell for the turn clock.
//!
//! A thin host around the pure [`turnclock_app`] reducer. An input adapter
//! and a one-second timer feed a single ordered event queue, a processing
//! loop owns the model, and every processed event ends in a redraw. The
//! reducer never sees the terminal, and this crate never applies a game
//! rule itself.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod input;
pub mod runtime;
pub mod ui;
pub mod view;

pub use runtime::{Runtime, RuntimeError};
pub use view::{ConfirmOverlay, KeyRoute, OptionsRow, ViewState};
