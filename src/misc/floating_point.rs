use nalgebra::{Point3, RealField};
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Distance below which two points are considered coincident
    fn point_tolerance() -> Self {
        Self::from_f64(1e-6).unwrap()
    }
}

impl FloatingPoint for f32 {
    fn point_tolerance() -> Self {
        1e-4
    }
}

impl FloatingPoint for f64 {}

/// Check if two points coincide within the point tolerance
pub fn points_almost_equal<T: FloatingPoint>(a: &Point3<T>, b: &Point3<T>) -> bool {
    (a - b).norm() < T::point_tolerance()
}

/// Check if two scalars coincide within the point tolerance
pub fn almost_equal<T: FloatingPoint>(a: T, b: T) -> bool {
    (a - b).abs() < T::point_tolerance()
}
