pub mod primitives;
pub mod projection;
pub mod ticks;
pub mod time_window;
pub mod types;

pub use projection::{EndCap, EventMarker, data_end, project_events, resolve_end_cap};
pub use ticks::{TickInterval, TickTimes, aligned_tick_times};
pub use time_window::{ViewportWindow, ZoomLimits};
pub use types::{AbsoluteRange, EventInterval, Timestamp, Viewport};
