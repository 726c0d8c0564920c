//! Time-driven animation.
//!
//! - [`KeyframeTrack`] - sparse `(time, value)` samples with linear interpolation
//! - [`AnimationClock`] - wall-clock milliseconds to a cyclic phase in seconds
//! - [`Timeline`] - named tracks evaluated against one clock

mod clock;
mod timeline;
mod track;

pub use clock::*;
pub use timeline::*;
pub use track::*;
