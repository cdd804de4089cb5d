use glam::DVec3;

use crate::{
    error::{Error, Result},
    octant::{octant_centers, Octant},
    sphere::Sphere,
    subdivide_method::{sequential, SubdivideMethod},
};

/// Child slots of an [`OctreeNode`], indexed by [`Octant::index`].
pub type Children = [Option<Box<OctreeNode>>; Octant::COUNT];

/// A node of an [`Octree`](crate::Octree) covering a cube.
///
/// A node records the center of its cube followed by the centers of its octants that lie inside
/// its inscribed [`Sphere`], and owns one child node for each of those octants once subdivided.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeNode {
    center: DVec3,
    size: f64,
    sphere: Sphere,
    points: Vec<DVec3>,
    children: Children,
    subdivided: bool,
}

/// Outcome of [`OctreeNode::subdivide_and_check`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subdivision {
    /// The cube size is 1 or smaller, the node stays a leaf.
    MinimumSize,
    /// The center of the node is outside its own sphere.
    CenterOutside,
    /// None of the octant centers are inside the sphere.
    NoOctantInside,
    /// The accepted octant centers were recorded and a child node was subdivided for each of them.
    Subdivided,
    /// The node was already subdivided, nothing changed.
    AlreadySubdivided,
}

impl OctreeNode {
    /// Creates a new leaf [`OctreeNode`] for the cube of the given center and size.
    ///
    /// Its points only contain `center` and all its children are empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `size` is not strictly positive or if any of the
    /// values is not finite.
    pub fn new(center: DVec3, size: f64) -> Result<Self> {
        if !center.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "cube center must be finite, got {center}"
            )));
        }

        if !(size.is_finite() && size > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "cube size must be positive and finite, got {size}"
            )));
        }

        Ok(Self::new_unchecked(center, size))
    }

    #[inline]
    fn new_unchecked(center: DVec3, size: f64) -> Self {
        Self {
            center,
            size,
            sphere: Sphere::inscribed(center, size),
            points: vec![center],
            children: Default::default(),
            subdivided: false,
        }
    }

    /// Center of the cube.
    #[inline]
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Edge length of the cube.
    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Sphere inscribed in the cube.
    #[inline]
    pub fn sphere(&self) -> Sphere {
        self.sphere
    }

    /// Points recorded by this node: its center followed by its accepted octant centers in
    /// octant order.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Child slots of this node.
    #[inline]
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Returns the child at the given octant, if any.
    #[inline]
    pub fn child(&self, octant: Octant) -> Option<&OctreeNode> {
        self.children[octant.index()].as_deref()
    }

    /// Returns true if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Returns true if [`subdivide_and_check`](Self::subdivide_and_check) already ran on this node.
    #[inline]
    pub fn is_subdivided(&self) -> bool {
        self.subdivided
    }

    /// Centers of the eight octants of the cube, in [`Octant`] order.
    #[inline]
    pub fn octant_centers(&self) -> [DVec3; Octant::COUNT] {
        octant_centers(self.center, self.size)
    }

    /// Recursively subdivides the node depth-first, one octant at a time.
    ///
    /// See [`subdivide_with`](Self::subdivide_with).
    #[inline]
    pub fn subdivide_and_check(&mut self) -> Subdivision {
        self.subdivide_with(&sequential::DepthFirst)
    }

    /// Recursively subdivides the node, using the given [`SubdivideMethod`] to descend into the
    /// children.
    ///
    /// Stops without subdividing if the cube size is 1 or smaller, if the center of the node is not
    /// inside its own sphere or if none of the octant centers are inside the sphere. Otherwise,
    /// every octant center inside the sphere is appended to the points of the node and a child
    /// node of half the size is created and subdivided at each of them.
    ///
    /// Only the first call has an effect, subsequent ones return
    /// [`Subdivision::AlreadySubdivided`].
    pub fn subdivide_with<M>(&mut self, method: &M) -> Subdivision
    where
        M: SubdivideMethod + ?Sized,
    {
        if self.subdivided {
            tracing::debug!(center = ?self.center, "node already subdivided");
            return Subdivision::AlreadySubdivided;
        }
        self.subdivided = true;

        if self.size <= 1.0 {
            tracing::debug!(size = self.size, "cube size is 1 or smaller, stopping subdivision");
            return Subdivision::MinimumSize;
        }

        tracing::trace!(size = self.size, center = ?self.center, "checking octants");

        if !self.sphere.contains(self.center) {
            tracing::debug!(center = ?self.center, "center is outside the sphere, stopping");
            return Subdivision::CenterOutside;
        }

        let accepted = self.check_octant_centers();

        if self.points.len() <= 1 {
            tracing::debug!(center = ?self.center, "no octant center inside the sphere");
            return Subdivision::NoOctantInside;
        }

        method.descend(self, &accepted);

        Subdivision::Subdivided
    }

    /// Appends the octant centers inside the sphere to the points and returns their octants.
    fn check_octant_centers(&mut self) -> Vec<Octant> {
        let mut accepted = Vec::with_capacity(Octant::COUNT);

        for (octant, octant_center) in Octant::ALL.into_iter().zip(self.octant_centers()) {
            if self.sphere.contains(octant_center) {
                self.points.push(octant_center);
                accepted.push(octant);
            } else {
                tracing::debug!(center = ?octant_center, "octant center is outside the sphere");
            }
        }

        accepted
    }

    /// Creates the child node of half the size at the center of the given octant.
    pub(crate) fn insert_child(&mut self, octant: Octant) -> &mut OctreeNode {
        let child = Self::new_unchecked(octant.center_in(self.center, self.size), self.size / 2.0);
        tracing::trace!(center = ?child.center, size = child.size, "subdividing at octant center");

        let slot = &mut self.children[octant.index()];
        debug_assert!(slot.is_none(), "child slots are populated at most once");

        slot.insert(Box::new(child)).as_mut()
    }

    #[cfg(feature = "parallel")]
    #[inline]
    pub(crate) fn children_mut(&mut self) -> &mut [Option<Box<OctreeNode>>] {
        &mut self.children
    }

    /// Returns an iterator that traverses the nodes of the subtree depth-first, parents before
    /// their children and children in octant order.
    #[inline]
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// Returns the points of this node followed by the extracted points of each of its children in
    /// octant order.
    pub fn extract_points(&self) -> Vec<DVec3> {
        self.iter()
            .flat_map(|node| node.points.iter().copied())
            .collect()
    }

    /// Spheres of every node in the subtree, in the same order as [`iter`](Self::iter).
    pub fn spheres(&self) -> Vec<Sphere> {
        self.iter().map(OctreeNode::sphere).collect()
    }

    /// Number of edges on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .flatten()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Depth-first iterator over the nodes of a subtree, returned by [`OctreeNode::iter`].
#[derive(Clone, Debug)]
pub struct Nodes<'a> {
    stack: Vec<&'a OctreeNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a OctreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().flatten().map(Box::as_ref));

        Some(node)
    }
}
