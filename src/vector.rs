/// Arbitrary 3D vectors that can be converted into an array of three scalars of type `S`.
///
/// Every vector is converted to a [`Point`](crate::Point) (`glam::DVec3`) before any geometry is
/// computed, so vectors with `f32` and `f64` components are both accepted.
pub trait Vector<S> {
    /// Convert the arbitrary vector into its internal representation.
    fn into_internal(self) -> glam::DVec3;
}

macro_rules! impl_vector {
    ($s: ty, $to_f64: expr) => {
        impl<V> Vector<$s> for V
        where
            V: Into<[$s; 3]>,
        {
            #[inline]
            fn into_internal(self) -> glam::DVec3 {
                let [x, y, z]: [$s; 3] = self.into();
                glam::DVec3::new($to_f64(x), $to_f64(y), $to_f64(z))
            }
        }
    };
}

impl_vector!(f32, f64::from);
impl_vector!(f64, std::convert::identity);

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec3, Vec3};

    #[test]
    fn single_precision() {
        assert_eq!(
            <Vec3 as Vector<f32>>::into_internal(Vec3::new(0.5, -1.0, 2.0)),
            DVec3::new(0.5, -1.0, 2.0)
        );
    }

    #[test]
    fn arrays() {
        assert_eq!(
            Vector::<f64>::into_internal([1.0f64, 2.0, 3.0]),
            DVec3::new(1.0, 2.0, 3.0)
        );
        assert_eq!(
            Vector::<f32>::into_internal([0.25f32, 0.0, -4.0]),
            DVec3::new(0.25, 0.0, -4.0)
        );
    }
}
