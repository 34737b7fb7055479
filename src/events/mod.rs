//! Event handling module for keyboard and mouse events.
//!
//! Terminal events are turned into [`Action`]s here; `App::dispatch` applies
//! them. Display updates from the engine bypass this module and are applied
//! straight from the event loop.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
