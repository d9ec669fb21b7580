//! Optional hooks around the engine core.

mod plugins;

pub use plugins::{PluginContext, PluginEvent, TimelinePlugin};
