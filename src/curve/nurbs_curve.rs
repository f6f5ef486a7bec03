use nalgebra::{Point3, Point4, Translation3, Vector3, Vector4};

use crate::knot::KnotVector;
use crate::misc::{FloatingPoint, Invertible, Transformable};

use super::Curve;

/// NURBS curve representation in 3D space
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NurbsCurve<T: FloatingPoint> {
    /// control points with homogeneous coordinates
    /// the last element of the vector is the `weight`
    control_points: Vec<Point4<T>>,
    degree: usize,
    /// knot vector for the NURBS curve
    /// the length of the knot vector is equal to the `# of control points + degree + 1`
    knots: KnotVector<T>,
}

impl<T: FloatingPoint> NurbsCurve<T> {
    /// Create a new NURBS curve
    /// # Failures
    /// - if the number of control points is less than or equal to the degree
    /// - the number of knots is not equal to the number of control points + the degree + 1
    ///
    /// # Example
    /// ```
    /// use rebar_curves::prelude::*;
    /// use nalgebra::Point4;
    ///
    /// let w = 1.; // weight for each control points
    /// let control_points = vec![
    ///     Point4::new(0., 0., 0., w),
    ///     Point4::new(1., 2., 0., w),
    ///     Point4::new(3., 2., 0., w),
    ///     Point4::new(4., 0., 0., w),
    /// ];
    /// let knots = vec![0., 0., 0., 0., 1., 1., 1., 1.];
    /// let nurbs = NurbsCurve::try_new(3, control_points, knots);
    /// assert!(nurbs.is_ok());
    /// ```
    pub fn try_new(
        degree: usize,
        control_points: Vec<Point4<T>>,
        knots: Vec<T>,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            control_points.len() > degree,
            "Too few control points for curve"
        );
        anyhow::ensure!(
            knots.len() == control_points.len() + degree + 1,
            "Invalid number of knots, got {}, expected {}",
            knots.len(),
            control_points.len() + degree + 1
        );

        let mut knots = knots;
        knots.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Ok(Self {
            degree,
            control_points,
            knots: KnotVector::new(knots),
        })
    }

    pub(crate) fn new_unchecked(
        degree: usize,
        control_points: Vec<Point4<T>>,
        knots: KnotVector<T>,
    ) -> Self {
        Self {
            degree,
            control_points,
            knots,
        }
    }

    /// Create a degree 1 curve passing through the given points
    pub fn polyline(points: &[Point3<T>]) -> Self {
        let control_points = points
            .iter()
            .map(|p| Point4::new(p.x, p.y, p.z, T::one()))
            .collect::<Vec<_>>();
        let knots = KnotVector::clamped_uniform(control_points.len(), 1);
        Self::new_unchecked(1, control_points, knots)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &KnotVector<T> {
        &self.knots
    }

    pub fn control_points(&self) -> &[Point4<T>] {
        &self.control_points
    }

    /// Return the dehomogenized control points
    pub fn dehomogenized_control_points(&self) -> Vec<Point3<T>> {
        self.control_points.iter().map(dehomogenize).collect()
    }

    pub fn knots_domain(&self) -> (T, T) {
        self.knots.domain(self.degree)
    }

    /// Map a normalized parameter into the knot domain
    fn to_knot(&self, t: T) -> T {
        let (d0, d1) = self.knots_domain();
        d0 + (d1 - d0) * t.clamp(T::zero(), T::one())
    }

    /// Evaluate the curve at a knot parameter to get a homogeneous point
    fn homogeneous_point(&self, u: T) -> Vector4<T> {
        let n = self.knots.len() - self.degree - 2;
        let knot_span_index = self.knots.find_knot_span_index(n, self.degree, u);
        let basis = self.knots.basis_functions(knot_span_index, u, self.degree);
        let mut position = Vector4::zeros();
        for i in 0..=self.degree {
            position += self.control_points[knot_span_index - self.degree + i].coords * basis[i];
        }
        position
    }

    /// Evaluate the curve at a knot parameter to get a dehomogenized point
    pub fn evaluate(&self, u: T) -> Point3<T> {
        dehomogenize(&Point4::from(self.homogeneous_point(u)))
    }

    /// Evaluate the first derivative at a knot parameter
    pub fn derivative(&self, u: T) -> Vector3<T> {
        let n = self.knots.len() - self.degree - 2;
        let knot_span_index = self.knots.find_knot_span_index(n, self.degree, u);
        let ders = self
            .knots
            .first_derivative_basis_functions(knot_span_index, u, self.degree);
        let mut derivative = Vector4::zeros();
        for i in 0..=self.degree {
            derivative +=
                self.control_points[knot_span_index - self.degree + i].coords * ders[i];
        }

        let point = self.homogeneous_point(u);
        let w = point.w;
        let position = point.xyz() / w;
        (derivative.xyz() - position * derivative.w) / w
    }
}

/// Project a homogeneous point back to 3D
fn dehomogenize<T: FloatingPoint>(p: &Point4<T>) -> Point3<T> {
    Point3::new(p.x / p.w, p.y / p.w, p.z / p.w)
}

impl<T: FloatingPoint> Curve<T> for NurbsCurve<T> {
    fn point_at(&self, t: T) -> Point3<T> {
        self.evaluate(self.to_knot(t))
    }

    fn tangent_at(&self, t: T) -> Vector3<T> {
        let (d0, d1) = self.knots_domain();
        self.derivative(self.to_knot(t)) * (d1 - d0)
    }

    fn is_straight(&self) -> bool {
        let start = self.start_point();
        let end = self.end_point();
        let chord = end - start;
        let length = chord.norm();
        if length <= T::point_tolerance() {
            return false;
        }
        let tolerance = T::point_tolerance() * (T::one() + length);
        let direction = chord / length;
        self.dehomogenized_control_points().iter().all(|p| {
            let v = p - start;
            (v - direction * v.dot(&direction)).norm() <= tolerance
        })
    }
}

impl<T: FloatingPoint> Invertible for NurbsCurve<T> {
    /// Reverse the direction of the curve
    /// # Example
    /// ```
    /// use rebar_curves::prelude::*;
    /// use nalgebra::Point3;
    /// use approx::assert_relative_eq;
    ///
    /// let points = vec![
    ///     Point3::new(0.0, 0.0, 0.),
    ///     Point3::new(1.0, 1.0, 0.),
    ///     Point3::new(2.0, 0.5, 0.),
    ///     Point3::new(3.0, 2.0, 0.),
    /// ];
    /// let mut curve = NurbsCurve::try_interpolate(&points, 3).unwrap();
    /// curve.invert();
    /// assert_relative_eq!(curve.start_point(), points[points.len() - 1], epsilon = 1e-10);
    /// assert_relative_eq!(curve.end_point(), points[0], epsilon = 1e-10);
    /// ```
    fn invert(&mut self) {
        self.control_points.reverse();
        self.knots.invert();
    }
}

impl<'a, T: FloatingPoint> Transformable<&'a Translation3<T>> for NurbsCurve<T> {
    fn transform(&mut self, transform: &'a Translation3<T>) {
        self.control_points.iter_mut().for_each(|p| {
            let w = p.w;
            p.x += transform.vector.x * w;
            p.y += transform.vector.y * w;
            p.z += transform.vector.z * w;
        });
    }
}
