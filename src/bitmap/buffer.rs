//! Decoded RGB pixel storage.

use crate::util::{Error, Result, UVec2};

use super::format::BYTES_PER_PIXEL;

/// Decoded RGB image, rows top-to-bottom.
///
/// `pixels` holds `width * height * 3` bytes in R,G,B order.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImagePixelBuffer {
    /// Wrap raw RGB bytes, checking the length against the dimensions.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::corrupt(format!("invalid image size {width}x{height}")));
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(Error::corrupt(format!(
                "{width}x{height} image needs {expected} bytes, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// All pixel bytes, row-major, top row first.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Give up the buffer for upload without copying.
    #[inline]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes of row `y` (0 = top), or `None` if out of range.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;
        self.pixels.get(start..start + stride)
    }

    /// RGB value at `(x, y)` with `(0, 0)` the top-left corner.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width {
            return None;
        }
        let row = self.row(y)?;
        let i = x as usize * BYTES_PER_PIXEL;
        Some([row[i], row[i + 1], row[i + 2]])
    }

    /// Expand to RGBA with opaque alpha, for backends without RGB formats.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() / BYTES_PER_PIXEL * 4);
        for rgb in self.pixels.chunks_exact(BYTES_PER_PIXEL) {
            out.extend_from_slice(rgb);
            out.push(u8::MAX);
        }
        out
    }
}

impl std::fmt::Debug for ImagePixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ImagePixelBuffer {
        // 2x2: red, green / blue, white
        ImagePixelBuffer::from_raw(
            2,
            2,
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255],
        )
        .unwrap()
    }

    #[test]
    fn test_pixel_access() {
        let img = sample();
        assert_eq!(img.size(), UVec2::new(2, 2));
        assert_eq!(img.pixel(0, 0), Some([255, 0, 0]));
        assert_eq!(img.pixel(1, 0), Some([0, 255, 0]));
        assert_eq!(img.pixel(0, 1), Some([0, 0, 255]));
        assert_eq!(img.pixel(1, 1), Some([255, 255, 255]));
        assert_eq!(img.pixel(2, 0), None);
        assert_eq!(img.pixel(0, 2), None);
        assert_eq!(img.row(1), Some(&[0, 0, 255, 255, 255, 255][..]));
    }

    #[test]
    fn test_to_rgba8() {
        let rgba = sample().to_rgba8();
        assert_eq!(rgba.len(), 16);
        assert_eq!(&rgba[..8], &[255, 0, 0, 255, 0, 255, 0, 255]);
    }

    #[test]
    fn test_from_raw_checks_length() {
        assert!(ImagePixelBuffer::from_raw(2, 2, vec![0; 11]).is_err());
        assert!(ImagePixelBuffer::from_raw(0, 2, Vec::new()).is_err());
    }
}
