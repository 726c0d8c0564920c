//! Bitmap (.bmp) format constants and header layout.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::util::{Error, Result};

/// Magic bytes at the start of a bitmap file.
pub const BMP_MAGIC: &[u8; 2] = b"BM";

/// Size of the file header in bytes.
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of the smallest supported info header (BITMAPINFOHEADER).
pub const INFO_HEADER_MIN_SIZE: usize = 40;

/// The only supported pixel depth: packed B,G,R bytes.
pub const SUPPORTED_BITS_PER_PIXEL: u16 = 24;

/// Compression value for uncompressed pixel data (BI_RGB).
pub const COMPRESSION_NONE: u32 = 0;

/// Bytes per decoded pixel (R,G,B).
pub const BYTES_PER_PIXEL: usize = 3;

/// Row length on disk: `width * 3` rounded up to a multiple of 4.
#[inline]
pub const fn row_stride(width: usize) -> usize {
    (width * BYTES_PER_PIXEL + 3) & !3
}

/// Fields of the file header and info header the decoder relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapHeader {
    /// Total file size as declared by the writer (often unreliable).
    pub file_size: u32,
    /// Byte offset of the pixel array from the start of the file.
    pub data_offset: u32,
    /// Size of the info header.
    pub info_size: u32,
    pub width: i32,
    /// Positive for bottom-to-top rows, negative for top-to-bottom.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
}

impl BitmapHeader {
    /// Read both headers. The caller has already checked the magic bytes.
    pub fn read(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < FILE_HEADER_SIZE + INFO_HEADER_MIN_SIZE {
            return Err(Error::corrupt(format!(
                "file is {} bytes, headers need at least {}",
                bytes.len(),
                FILE_HEADER_SIZE + INFO_HEADER_MIN_SIZE
            )));
        }

        let mut r = Cursor::new(&bytes[BMP_MAGIC.len()..]);
        let file_size = r.read_u32::<LittleEndian>()?;
        let _ = r.read_u16::<LittleEndian>()?; // reserved
        let _ = r.read_u16::<LittleEndian>()?; // reserved
        let data_offset = r.read_u32::<LittleEndian>()?;

        let info_size = r.read_u32::<LittleEndian>()?;
        let width = r.read_i32::<LittleEndian>()?;
        let height = r.read_i32::<LittleEndian>()?;
        let planes = r.read_u16::<LittleEndian>()?;
        let bits_per_pixel = r.read_u16::<LittleEndian>()?;
        let compression = r.read_u32::<LittleEndian>()?;

        Ok(Self {
            file_size,
            data_offset,
            info_size,
            width,
            height,
            planes,
            bits_per_pixel,
            compression,
        })
    }

    /// Whether rows are stored bottom-to-top.
    #[inline]
    pub fn is_bottom_up(&self) -> bool {
        self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_stride() {
        assert_eq!(row_stride(1), 4);
        assert_eq!(row_stride(2), 8);
        assert_eq!(row_stride(4), 12);
        assert_eq!(row_stride(5), 16);
    }

    #[test]
    fn test_short_header_is_corrupt() {
        let err = BitmapHeader::read(b"BM\0\0\0\0").unwrap_err();
        assert!(matches!(err, Error::CorruptFile(_)));
    }
}
