use nalgebra::Vector3;

use super::FloatingPoint;

/// Angle between two vectors in degrees, in [0, 180]
pub fn angle_between_degrees<T: FloatingPoint>(a: &Vector3<T>, b: &Vector3<T>) -> T {
    a.angle(b) * T::from_f64(180.).unwrap() / T::pi()
}

/// Check if two directions are parallel or anti-parallel within `tolerance` degrees
pub fn is_parallel<T: FloatingPoint>(a: &Vector3<T>, b: &Vector3<T>, tolerance: T) -> bool {
    let angle = angle_between_degrees(a, b);
    let straight = T::from_f64(180.).unwrap();
    angle.abs() < tolerance || (straight - angle).abs() < tolerance
}
