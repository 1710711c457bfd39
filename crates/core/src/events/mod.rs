//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events after
//! successful domain mutations. Readers subscribe through a sink instead of
//! re-reading the store on an interval to detect external changes.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
