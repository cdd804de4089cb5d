/// Trait to describe an axis-aligned cube given by its [center](Cube::center) and its edge
/// [size](Cube::size).
///
/// Any type implementing it can be used as the boundary of an [`Octree`](crate::Octree).
///
/// #### Deriving:
///
/// Used when the type has fields named `center` and `size`:
///
/// ```
/// # use octsphere::prelude::*;
/// # use glam::Vec3;
/// #
/// #[derive(Cube)]
/// struct Volume {
///     center: Vec3,
///     size: f32,
/// //  ...
/// }
/// ```
/// #### Manual implementation:
///
/// Used when the type cannot directly provide a center and a size.
///
/// ```
/// # use octsphere::prelude::*;
/// # use glam::DVec3;
/// #
/// struct Region {
///     min: DVec3,
///     edge: f64,
/// }
///
/// impl Cube for Region {
///     type Scalar = f64;
///
///     type Vector = DVec3;
///
///     fn center(&self) -> DVec3 {
///         self.min + DVec3::splat(self.edge / 2.0)
///     }
///
///     fn size(&self) -> f64 {
///         self.edge
///     }
/// }
/// ```
///
/// Tuples of a vector and a scalar implement [`Cube`] as well.
///
/// ```
/// # use octsphere::prelude::*;
/// # use glam::DVec3;
/// let cube = (DVec3::ZERO, 2.0);
///
/// assert_eq!(cube.center(), DVec3::ZERO);
/// assert_eq!(cube.size(), 2.0);
/// ```
pub trait Cube {
    /// Type of the [size](Cube::size) and of the components of the [center](Cube::center).
    type Scalar;

    /// Type of the [center](Cube::center).
    type Vector;

    /// The center of the cube.
    fn center(&self) -> Self::Vector;

    /// The edge length of the cube.
    fn size(&self) -> Self::Scalar;
}

impl<V, S> Cube for (V, S)
where
    S: Clone,
    V: Clone,
{
    type Scalar = S;

    type Vector = V;

    #[inline]
    fn center(&self) -> Self::Vector {
        self.0.clone()
    }

    #[inline]
    fn size(&self) -> Self::Scalar {
        self.1.clone()
    }
}

impl<C> Cube for &C
where
    C: Cube,
{
    type Scalar = C::Scalar;

    type Vector = C::Vector;

    #[inline]
    fn center(&self) -> Self::Vector {
        (**self).center()
    }

    #[inline]
    fn size(&self) -> Self::Scalar {
        (**self).size()
    }
}

impl<C> Cube for &mut C
where
    C: Cube,
{
    type Scalar = C::Scalar;

    type Vector = C::Vector;

    #[inline]
    fn center(&self) -> Self::Vector {
        (**self).center()
    }

    #[inline]
    fn size(&self) -> Self::Scalar {
        (**self).size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use glam::{DVec3, Vec3};

    #[derive(Cube)]
    struct Volume {
        center: Vec3,
        size: f32,
    }

    #[test]
    fn derived() {
        let volume = Volume {
            center: Vec3::ONE,
            size: 4.0,
        };

        assert_eq!(volume.center(), Vec3::ONE);
        assert_eq!(volume.size(), 4.0);
    }

    #[derive(Cube)]
    struct Tagged<T> {
        center: DVec3,
        size: f64,
        #[allow(dead_code)]
        tag: T,
    }

    #[test]
    fn derived_generic() {
        let tagged = Tagged {
            center: DVec3::NEG_ONE,
            size: 8.0,
            tag: "root",
        };

        assert_eq!(tagged.center(), DVec3::NEG_ONE);
        assert_eq!(tagged.size(), 8.0);
        assert_eq!(Boundary::of(&tagged), Boundary::new(DVec3::NEG_ONE, 8.0));
    }

    #[test]
    fn references() {
        let mut cube = (DVec3::X, 0.5);

        assert_eq!((&cube).center(), DVec3::X);
        assert_eq!((&mut cube).size(), 0.5);
    }

    #[test]
    fn into_boundary() {
        let volume = Volume {
            center: Vec3::new(1.0, -2.0, 0.5),
            size: 3.0,
        };

        assert_eq!(
            Boundary::of(&volume),
            Boundary::new(DVec3::new(1.0, -2.0, 0.5), 3.0)
        );
    }
}
