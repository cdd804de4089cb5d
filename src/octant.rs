use std::fmt;

use glam::DVec3;

/// One of the eight sub-cubes obtained by bisecting a cube along all three axes.
///
/// Octants are ordered by the signs of their offset from the parent center, with `x` being the
/// most significant axis and a positive offset coming before a negative one:
///
/// | index | x | y | z |
/// |-------|---|---|---|
/// | 0     | + | + | + |
/// | 1     | + | + | - |
/// | 2     | + | - | + |
/// | 3     | + | - | - |
/// | 4     | - | + | + |
/// | 5     | - | + | - |
/// | 6     | - | - | + |
/// | 7     | - | - | - |
///
/// The index of an octant is also the index of the corresponding child of an
/// [`OctreeNode`](crate::OctreeNode).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Octant(u8);

impl Octant {
    /// Number of octants in a cube.
    pub const COUNT: usize = 8;

    /// All octants in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Returns the octant at the given index, or [`None`] if it is out of range.
    #[inline]
    pub fn new(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Index of the octant, in `0..8`.
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Signs of the offset from the parent center along the `x`, `y` and `z` axes.
    #[inline]
    pub fn signs(self) -> [f64; 3] {
        [0b100, 0b010, 0b001].map(|bit| if self.0 & bit == 0 { 1.0 } else { -1.0 })
    }

    /// Center of this octant within the cube of the given `center` and `size`.
    #[inline]
    pub fn center_in(self, center: DVec3, size: f64) -> DVec3 {
        let quarter = size / 2.0 / 2.0;
        let [x, y, z] = self.signs();

        DVec3::new(
            center.x + x * quarter,
            center.y + y * quarter,
            center.z + z * quarter,
        )
    }
}

impl fmt::Debug for Octant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |s: f64| if s > 0.0 { '+' } else { '-' };
        let [x, y, z] = self.signs();

        write!(f, "Octant({}{}{})", sign(x), sign(y), sign(z))
    }
}

/// Centers of the eight octants of the cube of the given `center` and `size`, in index order.
#[inline]
pub fn octant_centers(center: DVec3, size: f64) -> [DVec3; Octant::COUNT] {
    Octant::ALL.map(|octant| octant.center_in(center, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order() {
        let signs = Octant::ALL.map(Octant::signs);

        assert_eq!(
            signs,
            [
                [1.0, 1.0, 1.0],
                [1.0, 1.0, -1.0],
                [1.0, -1.0, 1.0],
                [1.0, -1.0, -1.0],
                [-1.0, 1.0, 1.0],
                [-1.0, 1.0, -1.0],
                [-1.0, -1.0, 1.0],
                [-1.0, -1.0, -1.0],
            ]
        );
    }

    #[test]
    fn index() {
        for (i, octant) in Octant::ALL.into_iter().enumerate() {
            assert_eq!(octant.index(), i);
            assert_eq!(Octant::new(i), Some(octant));
        }
        assert_eq!(Octant::new(8), None);
    }

    #[test]
    fn centers_unit() {
        let centers = octant_centers(DVec3::ZERO, 2.0);

        assert_eq!(centers[0], DVec3::splat(0.5));
        assert_eq!(centers[3], DVec3::new(0.5, -0.5, -0.5));
        assert_eq!(centers[6], DVec3::new(-0.5, -0.5, 0.5));
        assert_eq!(centers[7], DVec3::splat(-0.5));
    }

    #[test]
    fn centers_offset() {
        let center = DVec3::new(10.0, -4.0, 2.0);
        let centers = octant_centers(center, 8.0);

        assert_eq!(centers[1], DVec3::new(12.0, -2.0, 0.0));
        assert_eq!(centers[4], DVec3::new(8.0, -2.0, 4.0));

        let sum = centers.iter().fold(DVec3::ZERO, |sum, c| sum + *c);
        assert_eq!(sum / 8.0, center);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Octant::ALL[0]), "Octant(+++)");
        assert_eq!(format!("{:?}", Octant::ALL[5]), "Octant(-+-)");
    }
}
