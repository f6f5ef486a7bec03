pub mod any_curve;
pub mod arc;
pub mod line;
pub mod nurbs_curve;
pub mod poly_curve;
pub mod trimmed_curve;
pub use any_curve::*;
pub use arc::*;
pub use line::*;
pub use nurbs_curve::*;
pub use poly_curve::*;
pub use trimmed_curve::*;

use gauss_quad::GaussLegendre;
use nalgebra::{Point3, Vector3};

use crate::{error::GeometryError, misc::FloatingPoint};

/// Number of sub-intervals used by the default length quadrature
const LENGTH_SUBDIVISIONS: usize = 8;

/// Number of bisection steps used to invert arc length
const LENGTH_BISECTION_STEPS: usize = 64;

/// Evaluation contract for a parametric curve in 3D space.
/// Every curve is parametrized over the normalized domain [0, 1].
pub trait Curve<T: FloatingPoint> {
    /// Evaluate the curve at a normalized parameter
    fn point_at(&self, t: T) -> Point3<T>;

    /// First derivative with respect to the normalized parameter
    fn tangent_at(&self, t: T) -> Vector3<T>;

    fn start_point(&self) -> Point3<T> {
        self.point_at(T::zero())
    }

    fn end_point(&self) -> Point3<T> {
        self.point_at(T::one())
    }

    /// Arc length of the whole curve
    fn length(&self) -> T {
        self.length_at(T::one())
    }

    /// Arc length between the start of the curve and `t`
    fn length_at(&self, t: T) -> T {
        integrate_length(self, T::zero(), t)
    }

    /// Normalized parameter at which the arc length from the start equals `length`
    fn parameter_at_length(&self, length: T) -> T {
        bisect_length(self, length)
    }

    /// Check if the curve coincides with the chord between its end points
    fn is_straight(&self) -> bool {
        let chord = (self.end_point() - self.start_point()).norm();
        let length = self.length();
        length - chord <= T::point_tolerance() * (T::one() + length)
    }

    /// Divide the curve into `divisions` pieces of equal parameter width
    /// Returns `divisions + 1` points at the normalized parameters `i / divisions`.
    ///
    /// # Example
    /// ```
    /// use rebar_curves::prelude::*;
    /// use nalgebra::Point3;
    ///
    /// let line = Line::new(Point3::origin(), Point3::new(4.0, 0.0, 0.0));
    /// let points = line.try_divide(4).unwrap();
    /// assert_eq!(points.len(), 5);
    /// assert_eq!(points[1], Point3::new(1.0, 0.0, 0.0));
    /// assert!(line.try_divide(0).is_err());
    /// ```
    fn try_divide(&self, divisions: usize) -> anyhow::Result<Vec<Point3<T>>> {
        if divisions == 0 {
            return Err(GeometryError::InvalidDivision(divisions).into());
        }
        let n = T::from_usize(divisions).unwrap();
        Ok((0..=divisions)
            .map(|i| {
                if i == divisions {
                    self.end_point()
                } else {
                    self.point_at(T::from_usize(i).unwrap() / n)
                }
            })
            .collect())
    }
}

/// Integrate the speed of a curve between two normalized parameters by gauss-legendre quadrature
pub(crate) fn integrate_length<T: FloatingPoint, C: Curve<T> + ?Sized>(
    curve: &C,
    start: T,
    end: T,
) -> T {
    if end <= start {
        return T::zero();
    }

    let gauss = GaussLegendre::init(16);
    let left = start.to_f64().unwrap();
    let right = end.to_f64().unwrap();
    let step = (right - left) / LENGTH_SUBDIVISIONS as f64;
    let sum: f64 = (0..LENGTH_SUBDIVISIONS)
        .map(|i| {
            let a = left + step * i as f64;
            gauss.integrate(a, a + step, |x| {
                let x = T::from_f64(x).unwrap();
                curve.tangent_at(x).norm().to_f64().unwrap()
            })
        })
        .sum();
    T::from_f64(sum).unwrap()
}

/// Invert the arc length function of a curve by bisection
pub(crate) fn bisect_length<T: FloatingPoint, C: Curve<T> + ?Sized>(curve: &C, length: T) -> T {
    if length <= T::zero() {
        return T::zero();
    }
    if length >= curve.length() {
        return T::one();
    }

    let two = T::from_f64(2.).unwrap();
    let (mut low, mut high) = (T::zero(), T::one());
    for _ in 0..LENGTH_BISECTION_STEPS {
        let mid = (low + high) / two;
        if curve.length_at(mid) < length {
            low = mid;
        } else {
            high = mid;
        }
    }
    (low + high) / two
}
