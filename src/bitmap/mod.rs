//! Bitmap (.bmp) texture decoding.
//!
//! Only uncompressed 24-bit images are accepted. Decoded buffers are RGB,
//! top row first, with row padding removed.
//!
//! ```ignore
//! use scene_assets::bitmap;
//!
//! let earth = bitmap::load("assets/Earth.bmp")?;
//! upload_texture(earth.width(), earth.height(), earth.pixels());
//! ```

mod buffer;
mod cube_map;
mod decode;
mod format;

pub use buffer::*;
pub use cube_map::*;
pub use decode::*;
pub use format::*;

use std::path::Path;

use crate::util::{AssetBytes, Result};

/// Read and decode a bitmap file.
///
/// Errors carry the file path.
pub fn load(path: impl AsRef<Path>) -> Result<ImagePixelBuffer> {
    load_opts(path, cfg!(feature = "mmap"))
}

/// Read and decode a bitmap file with optional memory mapping.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_opts(path: impl AsRef<Path>, use_mmap: bool) -> Result<ImagePixelBuffer> {
    let path = path.as_ref();
    let bytes = AssetBytes::open_opts(path, use_mmap).map_err(|e| e.in_file(path))?;
    let image = decode(&bytes).map_err(|e| e.in_file(path))?;
    tracing::debug!(width = image.width(), height = image.height(), "loaded bitmap");
    Ok(image)
}
