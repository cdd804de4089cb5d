use glam::DVec3;

use crate::{
    config::Boundary,
    cube::Cube,
    error::{Error, Result},
    node::{OctreeNode, Subdivision},
    render::RenderData,
    subdivide_method::SubdivideMethod,
    vector::Vector,
};

/// Depth above which building a tree starts to get expensive, with `8^depth` leaves at worst.
const DEEP_TREE_WARNING: f64 = 8.0;

/// Handle owning the root [`OctreeNode`] built from a [`Boundary`].
#[derive(Clone, Debug, PartialEq)]
pub struct Octree {
    root: OctreeNode,
}

impl Octree {
    /// Creates an [`Octree`] whose root covers the given cube.
    ///
    /// The root is not subdivided, see [`subdivide`](Self::subdivide) or [`build`](Self::build).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the size of the cube is not strictly positive.
    pub fn new<C>(boundary: C) -> Result<Self>
    where
        C: Cube,
        C::Vector: Vector<C::Scalar>,
        C::Scalar: Into<f64>,
    {
        let Boundary { center, size } = Boundary::of(&boundary);

        if size.log2().ceil() > DEEP_TREE_WARNING {
            tracing::warn!(size, "boundary is large, the octree may take long to build");
        }

        Ok(Self {
            root: OctreeNode::new(center, size)?,
        })
    }

    /// Creates an [`Octree`] for the given cube and subdivides it depth-first.
    ///
    /// ```
    /// # use octsphere::prelude::*;
    /// # use glam::DVec3;
    /// let octree = Octree::build(Boundary::new(DVec3::ZERO, 2.0))?;
    ///
    /// assert_eq!(octree.root().points().len(), 9);
    /// assert_eq!(octree.points().len(), 17);
    /// # Ok::<(), octsphere::Error>(())
    /// ```
    pub fn build<C>(boundary: C) -> Result<Self>
    where
        C: Cube,
        C::Vector: Vector<C::Scalar>,
        C::Scalar: Into<f64>,
    {
        let mut octree = Self::new(boundary)?;
        octree.subdivide();

        Ok(octree)
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// Subdivides the root depth-first. See [`OctreeNode::subdivide_and_check`].
    #[inline]
    pub fn subdivide(&mut self) -> Subdivision {
        self.root.subdivide_and_check()
    }

    /// Subdivides the root using the given [`SubdivideMethod`]. See [`OctreeNode::subdivide_with`].
    #[inline]
    pub fn subdivide_with<M>(&mut self, method: &M) -> Subdivision
    where
        M: SubdivideMethod + ?Sized,
    {
        self.root.subdivide_with(method)
    }

    /// Every point recorded in the tree, in depth-first order. See [`OctreeNode::extract_points`].
    #[inline]
    pub fn points(&self) -> Vec<DVec3> {
        self.root.extract_points()
    }

    /// Data a renderer needs to draw the tree.
    pub fn render_data(&self) -> RenderData {
        RenderData::new(&self.root)
    }

    /// Inserts an arbitrary point in the tree.
    ///
    /// Reserved for future use: this always fails with [`Error::NotImplemented`] and leaves the
    /// tree unchanged.
    pub fn insert(&mut self, point: DVec3) -> Result<()> {
        tracing::debug!(?point, "insertion is not implemented");
        Err(Error::NotImplemented("insert"))
    }
}
