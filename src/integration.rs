//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - `Runtime`: message queues and the update cycle
//! - `AppRunner`: terminal events, the TMDB worker and rendering

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
