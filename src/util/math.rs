//! Math type re-exports and asset-specific math utilities.
//!
//! This module re-exports types from `glam` and provides the bounding box
//! used for loaded meshes.

// Re-export glam types
pub use glam::{
    // Single precision vectors
    Vec2, Vec3,
    // Integer vectors
    UVec2,
};

use bytemuck::{Pod, Zeroable};
use std::fmt;

/// 3D bounding box with single precision.
#[derive(Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct BBox3f {
    pub min: Vec3,
    pub max: Vec3,
}

impl BBox3f {
    /// Empty bounding box (inverted, will expand on first point).
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Create a new bounding box from min and max points.
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Build the smallest box containing every point.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Self {
        let mut b = Self::EMPTY;
        for &p in points {
            b.expand_by_point(p);
        }
        b
    }

    /// Check if this box is empty (contains no point).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Expand this box to include a point.
    #[inline]
    pub fn expand_by_point(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Get the center of the box.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the size (extents) of the box.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Radius of the sphere enclosing the box, measured from its center.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size().length() * 0.5
    }
}

impl Default for BBox3f {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for BBox3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox3f({:?} - {:?})", self.min, self.max)
    }
}

/// Seconds on an animation timeline.
pub type Seconds = f32;

/// Unit normal of the triangle `(v0, v1, v2)` using `(v1-v0) x (v2-v0)`.
///
/// Returns `None` when the cross product has zero length.
#[inline]
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Option<Vec3> {
    let n = (v1 - v0).cross(v2 - v0);
    let len = n.length();
    if len == 0.0 {
        None
    } else {
        Some(n / len)
    }
}
