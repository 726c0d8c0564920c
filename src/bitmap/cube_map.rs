//! Six-face cube map textures (sky boxes).

use std::path::Path;

use crate::util::{Error, Result};

use super::buffer::ImagePixelBuffer;

/// Face of a cube map, in texture-upload order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubeFace {
    /// All faces in `+X, -X, +Y, -Y, +Z, -Z` order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Six square faces of equal size.
#[derive(Clone, Debug)]
pub struct CubeMap {
    faces: [ImagePixelBuffer; 6],
}

impl CubeMap {
    /// Assemble a cube map, checking that every face is square and the same size.
    pub fn from_faces(faces: [ImagePixelBuffer; 6]) -> Result<Self> {
        let size = faces[0].width();
        for (face, img) in CubeFace::ALL.iter().zip(&faces) {
            if img.width() != img.height() {
                return Err(Error::corrupt(format!(
                    "cube face {face:?} is {}x{}, faces must be square",
                    img.width(),
                    img.height()
                )));
            }
            if img.width() != size {
                return Err(Error::corrupt(format!(
                    "cube face {face:?} is {}px, expected {size}px",
                    img.width()
                )));
            }
        }
        Ok(Self { faces })
    }

    /// Load six bitmap faces from `dir`, named in [`CubeFace::ALL`] order.
    pub fn load(dir: impl AsRef<Path>, names: [&str; 6]) -> Result<Self> {
        let dir = dir.as_ref();
        let mut faces = Vec::with_capacity(6);
        for name in names {
            faces.push(super::load(dir.join(name))?);
        }
        let faces: [ImagePixelBuffer; 6] = faces
            .try_into()
            .map_err(|_| Error::other("cube map needs exactly six faces"))?;
        let map = Self::from_faces(faces).map_err(|e| e.in_file(dir))?;
        tracing::debug!(dir = %dir.display(), size = map.size(), "loaded cube map");
        Ok(map)
    }

    #[inline]
    pub fn face(&self, face: CubeFace) -> &ImagePixelBuffer {
        &self.faces[face.index()]
    }

    /// Faces in [`CubeFace::ALL`] order.
    #[inline]
    pub fn faces(&self) -> &[ImagePixelBuffer; 6] {
        &self.faces
    }

    /// Edge length of every face in pixels.
    #[inline]
    pub fn size(&self) -> u32 {
        self.faces[0].width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(size: u32, rgb: [u8; 3]) -> ImagePixelBuffer {
        let pixels = rgb.repeat((size * size) as usize);
        ImagePixelBuffer::from_raw(size, size, pixels).unwrap()
    }

    #[test]
    fn test_from_faces() {
        let faces = CubeFace::ALL.map(|f| solid(2, [f.index() as u8 * 10, 0, 0]));
        let map = CubeMap::from_faces(faces).unwrap();
        assert_eq!(map.size(), 2);
        assert_eq!(map.face(CubeFace::NegativeY).pixel(0, 0), Some([30, 0, 0]));
        assert_eq!(map.faces().len(), 6);
    }

    #[test]
    fn test_mismatched_faces_rejected() {
        let mut faces = CubeFace::ALL.map(|_| solid(2, [0, 0, 0]));
        faces[4] = solid(4, [0, 0, 0]);
        assert!(matches!(CubeMap::from_faces(faces), Err(Error::CorruptFile(_))));

        let mut faces = CubeFace::ALL.map(|_| solid(2, [0, 0, 0]));
        faces[0] = ImagePixelBuffer::from_raw(2, 1, vec![0; 6]).unwrap();
        assert!(CubeMap::from_faces(faces).is_err());
    }
}
