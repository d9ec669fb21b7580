//! timeline-zoom: zoomable, pannable event timeline engine.
//!
//! `core` holds the pure window and projection math, `api` the
//! [`TimelineEngine`] facade that applies gestures and builds render frames,
//! and `selector` a headless two-click date range picker feeding the engine.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod selector;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
