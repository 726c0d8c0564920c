//! Uncompressed 24-bit bitmap decoding.

use crate::util::{Error, Result};

use super::buffer::ImagePixelBuffer;
use super::format::*;

/// Decode a 24-bit uncompressed bitmap into top-to-bottom RGB rows.
///
/// Fails with [`Error::UnsupportedFormat`] if the data does not start with
/// `BM`, and with [`Error::CorruptFile`] if the headers are inconsistent with
/// each other or with the data length. No partial buffer is ever returned.
#[tracing::instrument(skip_all, fields(len = bytes.len()))]
pub fn decode(bytes: &[u8]) -> Result<ImagePixelBuffer> {
    if bytes.len() < BMP_MAGIC.len() || &bytes[..BMP_MAGIC.len()] != BMP_MAGIC {
        return Err(Error::UnsupportedFormat {
            found: bytes.iter().take(BMP_MAGIC.len()).copied().collect(),
        });
    }

    let header = BitmapHeader::read(bytes)?;
    tracing::debug!(
        width = header.width,
        height = header.height,
        bpp = header.bits_per_pixel,
        offset = header.data_offset,
        "bitmap header"
    );

    if (header.info_size as usize) < INFO_HEADER_MIN_SIZE {
        return Err(Error::corrupt(format!(
            "info header size {} is below {INFO_HEADER_MIN_SIZE}",
            header.info_size
        )));
    }
    if header.bits_per_pixel != SUPPORTED_BITS_PER_PIXEL {
        return Err(Error::corrupt(format!(
            "{} bits per pixel, only {SUPPORTED_BITS_PER_PIXEL} is supported",
            header.bits_per_pixel
        )));
    }
    if header.compression != COMPRESSION_NONE {
        return Err(Error::corrupt(format!(
            "compression type {} is not supported",
            header.compression
        )));
    }
    if header.width <= 0 || header.height == 0 {
        return Err(Error::corrupt(format!(
            "invalid image size {}x{}",
            header.width, header.height
        )));
    }

    let width = header.width.unsigned_abs() as usize;
    let height = header.height.unsigned_abs() as usize;
    let offset = header.data_offset as usize;
    let headers_end = FILE_HEADER_SIZE + header.info_size as usize;
    if offset < headers_end {
        return Err(Error::corrupt(format!(
            "pixel data offset {offset} overlaps the headers ending at {headers_end}"
        )));
    }

    let stride = width
        .checked_mul(BYTES_PER_PIXEL)
        .and_then(|n| n.checked_add(3))
        .map(|n| n & !3)
        .ok_or_else(|| Error::corrupt("row size overflows"))?;
    let data_len = stride
        .checked_mul(height)
        .and_then(|n| n.checked_add(offset))
        .ok_or_else(|| Error::corrupt("pixel array size overflows"))?;
    if data_len > bytes.len() {
        return Err(Error::corrupt(format!(
            "{width}x{height} pixel array needs {data_len} bytes, file has {}",
            bytes.len()
        )));
    }
    if header.file_size as usize != bytes.len() {
        tracing::warn!(
            declared = header.file_size,
            actual = bytes.len(),
            "file size field does not match data length"
        );
    }

    let row_bytes = width * BYTES_PER_PIXEL;
    let mut pixels = Vec::with_capacity(row_bytes * height);
    for y in 0..height {
        let src_row = if header.is_bottom_up() { height - 1 - y } else { y };
        let start = offset + src_row * stride;
        for bgr in bytes[start..start + row_bytes].chunks_exact(BYTES_PER_PIXEL) {
            pixels.extend_from_slice(&[bgr[2], bgr[1], bgr[0]]);
        }
    }

    ImagePixelBuffer::from_raw(width as u32, height as u32, pixels)
}
