use glam::DVec3;
use serde::Serialize;

use crate::{config::Boundary, node::OctreeNode, sphere::Sphere};

/// Everything a renderer needs to draw a tree: the spheres of its nodes and the points they
/// accepted.
///
/// Drawing, axis scaling and interactive display are left to the renderer. `extent` holds the
/// minimum and maximum corners of the root cube to help with the latter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderData {
    /// Every recorded point, see [`OctreeNode::extract_points`].
    pub points: Vec<DVec3>,
    /// Sphere of every node, parents before their children.
    pub spheres: Vec<Sphere>,
    /// Minimum and maximum corners of the root cube.
    pub extent: [DVec3; 2],
}

impl RenderData {
    /// Collects the render data of the subtree of `node`.
    pub fn new(node: &OctreeNode) -> Self {
        Self {
            points: node.extract_points(),
            spheres: node.spheres(),
            extent: Boundary::new(node.center(), node.size()).extent(),
        }
    }
}
