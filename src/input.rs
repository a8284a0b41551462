//! Input subsystem.
//!
//! `raw` owns the crossterm polling loop and surfaces primitive events;
//! `service` translates those into domain notifications for the app loop.

pub mod raw;
pub mod service;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::input` rather than reaching into submodules.
pub use service::{EventSource, InputEvent, InputService};
