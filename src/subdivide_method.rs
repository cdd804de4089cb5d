#[cfg(feature = "parallel")]
/// Subdivision that descends into sibling octants on multiple CPU threads.
pub mod parallel;

/// Subdivision that descends into one octant after the other on one CPU thread.
pub mod sequential;

use crate::{node::OctreeNode, octant::Octant};

mod private {
    pub trait Sealed {}
}

/// Trait for the strategies used by [`OctreeNode::subdivide_with`] to descend into the children of
/// a node.
///
/// Once a node has recorded its accepted octant centers, the method creates a child node for each
/// of the accepted octants and subdivides it with the same method. Every method produces the same
/// tree; they only differ in how the work is scheduled.
///
/// # Example
///
/// ```
/// # use octsphere::prelude::*;
/// # use glam::DVec3;
/// let mut node = OctreeNode::new(DVec3::ZERO, 4.0)?;
///
/// assert_eq!(node.subdivide_with(&sequential::DepthFirst), Subdivision::Subdivided);
/// assert_eq!(node.depth(), 2);
/// # Ok::<(), octsphere::Error>(())
/// ```
pub trait SubdivideMethod: private::Sealed + Sync {
    /// Creates and subdivides the child of `node` at each of the `accepted` octants.
    fn descend(&self, node: &mut OctreeNode, accepted: &[Octant]);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::node::tests::random_cubes;

    /// Checks that `method` builds the same trees as the sequential depth-first subdivision.
    pub fn same_as_sequential<M>(method: M)
    where
        M: SubdivideMethod,
    {
        for (center, size) in random_cubes(16) {
            let mut expected = OctreeNode::new(center, size).unwrap();
            let mut computed = expected.clone();

            let outcome = expected.subdivide_with(&sequential::DepthFirst);
            assert_eq!(computed.subdivide_with(&method), outcome);
            assert_eq!(computed, expected);
            assert_eq!(computed.extract_points(), expected.extract_points());
        }
    }
}
