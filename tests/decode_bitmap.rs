//! Integration tests for bitmap decoding.

use std::io::Cursor;

use scene_assets::bitmap::{decode, row_stride, ImagePixelBuffer, BMP_MAGIC};
use scene_assets::Error;

/// Encode an RGB image with the `image` crate's BMP writer.
fn encode_with_image(img: &image::RgbImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Bmp)
        .expect("encode bmp");
    out.into_inner()
}

fn gradient(width: u32, height: u32) -> image::RgbImage {
    image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 37 % 256) as u8, (y * 53 % 256) as u8, ((x + y) * 11 % 256) as u8])
    })
}

#[test]
fn test_matches_image_crate() {
    // Odd widths exercise every row padding length.
    for (w, h) in [(1, 1), (2, 3), (3, 2), (5, 4), (64, 17)] {
        let src = gradient(w, h);
        let decoded = decode(&encode_with_image(&src)).unwrap();
        assert_eq!(decoded.width(), w);
        assert_eq!(decoded.height(), h);
        assert_eq!(decoded.pixels(), src.as_raw().as_slice(), "{w}x{h}");
    }
}

#[test]
fn test_image_crate_reads_our_pixels_back() {
    let src = gradient(7, 5);
    let ours = decode(&encode_with_image(&src)).unwrap();
    let theirs = image::load_from_memory_with_format(
        &encode_with_image(&src),
        image::ImageFormat::Bmp,
    )
    .unwrap()
    .to_rgb8();
    assert_eq!(ours.pixels(), theirs.as_raw().as_slice());
    assert_eq!(ours.pixel(6, 4), Some(src.get_pixel(6, 4).0));
}

/// Minimal bitmap with a larger (V5-sized) info header.
fn bmp_with_info_size(info_size: u32) -> Vec<u8> {
    let (w, h) = (2usize, 2usize);
    let offset = 14 + info_size as usize;
    let stride = row_stride(w);
    let size = offset + stride * h;
    let mut out = Vec::new();
    out.extend_from_slice(BMP_MAGIC);
    out.extend_from_slice(&(size as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&(offset as u32).to_le_bytes());
    out.extend_from_slice(&info_size.to_le_bytes());
    out.extend_from_slice(&(w as i32).to_le_bytes());
    out.extend_from_slice(&(h as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.resize(offset, 0);
    // Bottom row first: blue, white / top row: red, green.
    for row in [[[255u8, 0, 0], [255, 255, 255]], [[0, 0, 255], [0, 255, 0]]] {
        for bgr in row {
            out.extend_from_slice(&bgr);
        }
        out.resize(out.len() + stride - w * 3, 0);
    }
    out
}

#[test]
fn test_extended_info_header() {
    let img = decode(&bmp_with_info_size(124)).unwrap();
    assert_eq!(img.pixel(0, 0), Some([255, 0, 0]));
    assert_eq!(img.pixel(1, 0), Some([0, 255, 0]));
    assert_eq!(img.pixel(0, 1), Some([0, 0, 255]));
    assert_eq!(img.pixel(1, 1), Some([255, 255, 255]));
    assert_eq!(img.row(1), Some(&[0, 0, 255, 255, 255, 255][..]));
}

#[test]
fn test_small_info_header_rejected() {
    assert!(matches!(
        decode(&bmp_with_info_size(12)),
        Err(Error::CorruptFile(_))
    ));
}

#[test]
fn test_not_a_bitmap() {
    let err = decode(b"\x89PNG\r\n\x1a\n").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
    assert!(err.to_string().contains("89"));
}

#[test]
fn test_truncated_header() {
    assert!(matches!(decode(b"BM\0\0\0\0"), Err(Error::CorruptFile(_))));
}

#[test]
fn test_rgba_expansion() {
    let img = ImagePixelBuffer::from_raw(1, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(img.to_rgba8(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    assert_eq!(img.size().to_array(), [1, 2]);
}
