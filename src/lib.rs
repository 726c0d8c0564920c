//! # scene-assets
//!
//! Asset loading and animation timing for a small real-time 3D scene.
//!
//! ## Modules
//!
//! - [`anim`] - Keyframe tracks, the looping animation clock and timelines
//! - [`bitmap`] - 24-bit BMP texture decoding and cube maps
//! - [`geom`] - Wavefront OBJ meshes and render buffers
//! - [`config`] - JSON loader configuration
//! - [`logging`] - `tracing` subscriber setup
//! - [`util`] - Errors, math types and file access
//!
//! ## Example
//!
//! ```ignore
//! use scene_assets::prelude::*;
//!
//! let config = AssetConfig::load("scene.json")?;
//! let earth = bitmap::load(config.resolve("Earth.bmp"))?;
//! let ship = geom::load_obj(config.resolve("ship.obj"))?;
//!
//! let mut timeline = Timeline::new(config.clock()?);
//! timeline.add_track(
//!     "ship_y",
//!     KeyframeTrack::from_samples([(0.0, -0.65), (3.0, -0.15), (10.0, 4.35)])?,
//! )?;
//! let y = timeline.value_at("ship_y", elapsed_millis)?;
//! ```

pub mod anim;
pub mod bitmap;
pub mod config;
pub mod geom;
pub mod logging;
pub mod util;

// Re-export commonly used types
pub use util::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::anim::{AnimationClock, Keyframe, KeyframeTrack, Timeline, TrackDomain};
    pub use crate::bitmap::{self, CubeFace, CubeMap, ImagePixelBuffer};
    pub use crate::config::AssetConfig;
    pub use crate::geom::{self, FaceCorner, Mesh, MeshBuffers, Vertex};
    pub use crate::util::{BBox3f, Error, Result, Vec2, Vec3};
}
