use crate::{node::OctreeNode, octant::Octant};

/// A [`SubdivideMethod`](super::SubdivideMethod) that fully subdivides each child before creating
/// the next one, in octant order.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirst;

impl super::private::Sealed for DepthFirst {}

impl super::SubdivideMethod for DepthFirst {
    #[inline]
    fn descend(&self, node: &mut OctreeNode, accepted: &[Octant]) {
        for &octant in accepted {
            node.insert_child(octant).subdivide_with(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests;
    use super::*;

    #[test]
    fn depth_first() {
        tests::same_as_sequential(DepthFirst);
    }
}
