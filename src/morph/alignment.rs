use nalgebra::Point3;

use crate::misc::FloatingPoint;

/// Decides whether the samples of a second curve must be reversed
/// so that they run in the same direction as the samples of a first curve.
pub trait CurveAlignment<T: FloatingPoint> {
    fn should_reverse(&self, first: &[Point3<T>], second: &[Point3<T>]) -> bool;
}

/// Reverse when the end of the second curve is closer to the start of the first curve than its start is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EndpointDistance;

impl<T: FloatingPoint> CurveAlignment<T> for EndpointDistance {
    fn should_reverse(&self, first: &[Point3<T>], second: &[Point3<T>]) -> bool {
        match (first.first(), second.first(), second.last()) {
            (Some(origin), Some(head), Some(tail)) => {
                (tail - origin).norm() < (head - origin).norm()
            }
            _ => false,
        }
    }
}

/// Reverse when the summed distance between paired samples shrinks by reversing.
/// Stays stable when the endpoints of both curves are nearly equidistant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TotalDistance;

impl<T: FloatingPoint> CurveAlignment<T> for TotalDistance {
    fn should_reverse(&self, first: &[Point3<T>], second: &[Point3<T>]) -> bool {
        let forward = first
            .iter()
            .zip(second.iter())
            .fold(T::zero(), |acc, (a, b)| acc + (b - a).norm());
        let backward = first
            .iter()
            .zip(second.iter().rev())
            .fold(T::zero(), |acc, (a, b)| acc + (b - a).norm());
        backward < forward
    }
}
