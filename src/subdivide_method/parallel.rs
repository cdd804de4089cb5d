use crate::{node::OctreeNode, octant::Octant};

/// A [`SubdivideMethod`](super::SubdivideMethod) using the CPU with
/// [rayon](https://github.com/rayon-rs/rayon).
///
/// All the children of a node are created in octant order first, then their subtrees are
/// subdivided in parallel. The node is returned once every subtree is done.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirst;

impl super::private::Sealed for DepthFirst {}

impl super::SubdivideMethod for DepthFirst {
    fn descend(&self, node: &mut OctreeNode, accepted: &[Octant]) {
        use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};

        for &octant in accepted {
            node.insert_child(octant);
        }

        node.children_mut()
            .par_iter_mut()
            .filter_map(Option::as_mut)
            .for_each(|child| {
                child.subdivide_with(self);
            });
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
