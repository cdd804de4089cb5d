use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{cube::Cube, error::Result, octsphere_derive::Cube, vector::Vector};

/// Boundary of an [`Octree`](crate::Octree): the cube its root node covers.
///
/// Can be read from TOML:
///
/// ```toml
/// center = [0.0, 0.0, 0.0]
/// size = 2.0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Cube)]
#[serde(default)]
pub struct Boundary {
    /// Center of the cube.
    pub center: DVec3,
    /// Edge length of the cube.
    pub size: f64,
}

impl Boundary {
    /// Creates a new [`Boundary`] with the given center and size.
    #[inline]
    pub const fn new(center: DVec3, size: f64) -> Self {
        Self { center, size }
    }

    /// Creates a new [`Boundary`] from any type implementing [`Cube`].
    #[inline]
    pub fn of<C>(cube: &C) -> Self
    where
        C: Cube,
        C::Vector: Vector<C::Scalar>,
        C::Scalar: Into<f64>,
    {
        Self::new(cube.center().into_internal(), cube.size().into())
    }

    /// Parses a [`Boundary`] from a TOML document. Missing keys take their [default](Boundary::default) value.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Reads and parses a [`Boundary`] from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let boundary = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        tracing::debug!(path = %path.display(), ?boundary, "loaded boundary");

        Ok(boundary)
    }

    /// Minimum and maximum corners of the cube.
    #[inline]
    pub fn extent(&self) -> [DVec3; 2] {
        let half = DVec3::splat(self.size / 2.0);
        [self.center - half, self.center + half]
    }
}

impl Default for Boundary {
    /// A cube of size 2 centered on the origin.
    fn default() -> Self {
        Self::new(DVec3::ZERO, 2.0)
    }
}
