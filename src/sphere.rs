use glam::DVec3;
use serde::Serialize;

/// Sphere inscribed in the cube of an [`OctreeNode`](crate::OctreeNode).
///
/// Only ever derived from a cube: it shares the cube's center and its radius is half the cube's
/// edge length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
}

impl Sphere {
    /// Creates the sphere inscribed in the cube of the given center and size.
    #[inline]
    pub(crate) fn inscribed(center: DVec3, size: f64) -> Self {
        Self {
            center,
            radius: size / 2.0,
        }
    }

    /// Center of the sphere.
    #[inline]
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Radius of the sphere.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns true if the Euclidean distance between `point` and the center of the sphere does not
    /// exceed its radius.
    #[inline]
    pub fn contains(&self, point: DVec3) -> bool {
        self.center.distance(point) <= self.radius
    }
}
