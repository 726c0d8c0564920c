//! Triangle mesh produced by the mesh parser.

use crate::util::{BBox3f, Error, Result, Vec2, Vec3};

/// One corner of a triangle: 0-based indices into the mesh arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceCorner {
    /// Index into [`Mesh::vertices`].
    pub vertex: u32,
    /// Index into [`Mesh::texcoords`], if the corner has one.
    pub texcoord: Option<u32>,
    /// Index into [`Mesh::normals`]. Always set on parsed meshes.
    pub normal: Option<u32>,
}

impl FaceCorner {
    #[inline]
    pub const fn new(vertex: u32, texcoord: Option<u32>, normal: Option<u32>) -> Self {
        Self {
            vertex,
            texcoord,
            normal,
        }
    }
}

/// Three corners in winding order.
pub type Triangle = [FaceCorner; 3];

/// Triangulated polygon mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Unit normals: authored ones first, then generated face normals.
    pub normals: Vec<Vec3>,
    /// Texture coordinates (may be empty).
    pub texcoords: Vec<Vec2>,
    /// Triangles; polygons are already fan-triangulated.
    pub faces: Vec<Triangle>,
    /// Source lines of faces whose generated normal is the zero vector.
    pub degenerate_lines: Vec<usize>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }

    /// True when there is nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Positions of a triangle's corners.
    pub fn triangle_positions(&self, index: usize) -> Option<[Vec3; 3]> {
        let tri = self.faces.get(index)?;
        Some([
            *self.vertices.get(tri[0].vertex as usize)?,
            *self.vertices.get(tri[1].vertex as usize)?,
            *self.vertices.get(tri[2].vertex as usize)?,
        ])
    }

    /// Bounds of all vertex positions.
    pub fn bounds(&self) -> BBox3f {
        BBox3f::from_points(&self.vertices)
    }

    /// Degenerate-face conditions recorded while parsing.
    pub fn degenerate_faces(&self) -> impl Iterator<Item = Error> + '_ {
        self.degenerate_lines
            .iter()
            .map(|&line| Error::DegenerateFace { line })
    }

    /// Check that every face index is in range for its array.
    ///
    /// Fails with [`Error::CorruptFile`] naming the first bad triangle.
    pub fn validate(&self) -> Result<()> {
        let check = |what: &str, index: u32, count: usize, tri: usize| {
            if (index as usize) < count {
                Ok(())
            } else {
                Err(Error::corrupt(format!(
                    "triangle {tri}: {what} index {index} out of range ({count})"
                )))
            }
        };
        for (i, tri) in self.faces.iter().enumerate() {
            for corner in tri {
                check("vertex", corner.vertex, self.vertices.len(), i)?;
                if let Some(t) = corner.texcoord {
                    check("texcoord", t, self.texcoords.len(), i)?;
                }
                if let Some(n) = corner.normal {
                    check("normal", n, self.normals.len(), i)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        let c = |v| FaceCorner::new(v, None, Some(0));
        Mesh {
            vertices: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, -2.0),
            ],
            normals: vec![Vec3::Z],
            texcoords: Vec::new(),
            faces: vec![[c(0), c(1), c(2)], [c(0), c(2), c(3)]],
            degenerate_lines: Vec::new(),
        }
    }

    #[test]
    fn test_counts_and_bounds() {
        let m = quad();
        assert_eq!(m.num_vertices(), 4);
        assert_eq!(m.num_triangles(), 2);
        assert!(!m.has_texcoords());
        let b = m.bounds();
        assert_eq!(b.min, Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(b.max, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(m.triangle_positions(1).unwrap()[2], Vec3::new(0.0, 1.0, -2.0));
        assert!(m.triangle_positions(2).is_none());
    }

    #[test]
    fn test_validate() {
        let mut m = quad();
        assert!(m.validate().is_ok());

        m.faces[1][2].texcoord = Some(0);
        assert!(matches!(m.validate(), Err(Error::CorruptFile(_))));

        let mut m = quad();
        m.faces[0][1].vertex = 4;
        let err = m.validate().unwrap_err();
        assert!(matches!(err, Error::CorruptFile(ref msg) if msg.contains("triangle 0: vertex index 4")));
    }

    #[test]
    fn test_degenerate_faces() {
        let mut m = quad();
        m.degenerate_lines = vec![7];
        let errs: Vec<Error> = m.degenerate_faces().collect();
        assert!(matches!(errs.as_slice(), [Error::DegenerateFace { line: 7 }]));
    }
}
