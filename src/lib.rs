//! # Octsphere
//!
//! Octsphere is a crate recursively partitioning a cube into octants and keeping the octant centers
//! that fall inside the sphere inscribed in each cube.
//!
//! ## Goals
//!
//! The crate builds the tree and exposes the accepted points along with the sphere of every node so
//! that they can be handed to a renderer. It does not draw anything itself, nor is it a general
//! spatial index: points cannot be inserted and there are no queries.
//!
//! Subdivision runs on one thread by default. Enable the "parallel" feature to subdivide sibling
//! octants on multiple threads thanks to [rayon](https://github.com/rayon-rs/rayon).
//!
//! # Using Octsphere
//!
//! ## Describing the boundary
//!
//! The root of the tree covers a cube given by its center and its edge length. Use a
//! [`Boundary`], a tuple of a vector and a scalar or any type implementing [`Cube`](cube::Cube):
//!
//! ```
//! # use octsphere::prelude::*;
//! # use glam::Vec3;
//! #
//! #[derive(Cube)]
//! struct Volume {
//!     center: Vec3,
//!     size: f32,
//! //  ...
//! }
//! ```
//!
//! ## Building the tree
//!
//! [`Octree::new`] only creates the root. Subdivide it with [`Octree::subdivide`], or do both at
//! once with [`Octree::build`]:
//!
//! ```
//! # use octsphere::prelude::*;
//! # use glam::DVec3;
//! #
//! let mut octree = Octree::new(Boundary::new(DVec3::ZERO, 2.0))?;
//! assert_eq!(octree.subdivide(), Subdivision::Subdivided);
//!
//! // the center of the root followed by its 8 octant centers
//! assert_eq!(octree.root().points().len(), 9);
//! # Ok::<(), octsphere::Error>(())
//! ```
//!
//! ## Using the result
//!
//! [`Octree::points`] returns every accepted point, parents before their children.
//! [`Octree::render_data`] additionally returns the sphere of every node.
//!
//! ```
//! # use octsphere::prelude::*;
//! # use glam::DVec3;
//! #
//! let octree = Octree::build((DVec3::ZERO, 2.0))?;
//! let data = octree.render_data();
//!
//! assert_eq!(data.points.len(), 17);
//! assert_eq!(data.spheres[0].radius(), 1.0);
//! # Ok::<(), octsphere::Error>(())
//! ```

#![warn(missing_docs)]

/// Boundary of an octree and its configuration file.
pub mod config;

/// Trait to implement on types representing cubes.
pub mod cube;

/// Error and result types.
pub mod error;

/// Nodes of the tree and their subdivision.
pub mod node;

/// Octants of a cube and their centers.
pub mod octant;

/// Handle owning the root node.
pub mod octree;

/// Data handed to renderers.
pub mod render;

/// Sphere inscribed in a cube.
pub mod sphere;

/// Trait for descending into the children of a node and types implementing it for the user to
/// choose from.
pub mod subdivide_method;

/// Conversion of arbitrary vectors to the internal representation.
pub mod vector;

pub use config::Boundary;
pub use error::{Error, Result};
pub use node::{OctreeNode, Subdivision};
pub use octree::Octree;

/// Point in space, as stored in the tree.
pub type Point = glam::DVec3;

/// Derive macro for types representing cubes.
pub mod octsphere_derive {
    pub use octsphere_derive::Cube;
}

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::config::Boundary;
    pub use crate::cube::Cube;
    pub use crate::node::{OctreeNode, Subdivision};
    pub use crate::octant::Octant;
    pub use crate::octree::Octree;
    pub use crate::octsphere_derive::*;
    pub use crate::subdivide_method::*;
}
