//! Polygon mesh loading.
//!
//! - [`parse_obj`] - Wavefront OBJ text to a triangulated [`Mesh`]
//! - [`Mesh::to_buffers`] - indexed, interleaved [`Vertex`] data for upload
//!
//! ```ignore
//! use scene_assets::geom;
//!
//! let ship = geom::load_obj("assets/ship.obj")?;
//! let buffers = ship.to_buffers();
//! ```

mod buffers;
mod mesh;
mod obj;

pub use buffers::*;
pub use mesh::*;
pub use obj::*;

use std::path::Path;

use crate::util::{AssetBytes, Error, Result};

/// Read and parse an OBJ file.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh> {
    load_obj_opts(path, cfg!(feature = "mmap"))
}

/// Read and parse an OBJ file with optional memory mapping.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_obj_opts(path: impl AsRef<Path>, use_mmap: bool) -> Result<Mesh> {
    let path = path.as_ref();
    let bytes = AssetBytes::open_opts(path, use_mmap).map_err(|e| e.in_file(path))?;
    let text = std::str::from_utf8(&bytes).map_err(|e| Error::from(e).in_file(path))?;
    parse_obj(text).map_err(|e| e.in_file(path))
}
