use itertools::Itertools;
use nalgebra::{DMatrix, DVector, Point3, Point4};

use crate::{curve::NurbsCurve, knot::KnotVector, misc::FloatingPoint};

use super::Interpolation;

impl<T: FloatingPoint> Interpolation for NurbsCurve<T> {
    type Input = [Point3<T>];
    type Output = anyhow::Result<Self>;

    /// Interpolate a NURBS curve
    /// Try to create an interpolated NURBS curve passing through a set of points
    /// The degree is lowered to `points.len() - 1` when there are too few points.
    fn interpolate(input: &Self::Input, degree: usize) -> Self::Output {
        anyhow::ensure!(input.len() >= 2, "Too few points to interpolate");
        let degree = degree.min(input.len() - 1).max(1);
        let (control_points, knots) = try_interpolate_control_points(input, degree)?;
        Ok(Self::new_unchecked(degree, control_points, knots))
    }
}

impl<T: FloatingPoint> NurbsCurve<T> {
    /// Try to create an interpolated NURBS curve from a set of points
    /// # Example
    /// ```
    /// use rebar_curves::prelude::*;
    /// use nalgebra::Point3;
    /// use approx::assert_relative_eq;
    ///
    /// let points: Vec<Point3<f64>> = vec![
    ///     Point3::new(-1.0, -1.0, 0.),
    ///     Point3::new(1.0, -1.0, 0.),
    ///     Point3::new(1.0, 1.0, 0.),
    ///     Point3::new(-1.0, 1.0, 0.),
    ///     Point3::new(-1.0, 2.0, 0.),
    ///     Point3::new(1.0, 2.5, 0.),
    /// ];
    /// let curve = NurbsCurve::try_interpolate(&points, 3).unwrap();
    ///
    /// // Check equality of the first and last points
    /// assert_relative_eq!(points[0], curve.start_point(), epsilon = 1e-10);
    /// assert_relative_eq!(points[points.len() - 1], curve.end_point(), epsilon = 1e-10);
    /// ```
    pub fn try_interpolate(points: &[Point3<T>], degree: usize) -> anyhow::Result<Self> {
        <Self as Interpolation>::interpolate(points, degree)
    }
}

/// Try to interpolate the control points of a NURBS curve
/// Parameters are assigned by chord length and knots by averaging.
fn try_interpolate_control_points<T: FloatingPoint>(
    points: &[Point3<T>],
    degree: usize,
) -> anyhow::Result<(Vec<Point4<T>>, KnotVector<T>)> {
    let n = points.len();
    if n < degree + 1 {
        anyhow::bail!("Too few control points for curve");
    }

    let mut us: Vec<T> = vec![T::zero()];
    for (a, b) in points.iter().tuple_windows() {
        let chord = (b - a).norm();
        let last = us[us.len() - 1];
        us.push(last + chord);
    }

    // normalize
    let max = us[us.len() - 1];
    anyhow::ensure!(
        max > T::default_epsilon(),
        "Cannot interpolate coincident points"
    );
    us.iter_mut().for_each(|u| *u /= max);

    let mut knots = vec![T::zero(); degree + 1];
    for i in 1..(n - degree) {
        let mut weight_sums = T::zero();
        for j in 0..degree {
            weight_sums += us[i + j];
        }
        knots.push(weight_sums / T::from_usize(degree).unwrap());
    }
    knots.extend(std::iter::repeat_n(T::one(), degree + 1));
    let knots = KnotVector::new(knots);

    // build basis function coefficients matrix
    let span_max = n - 1;
    let mut m_a = DMatrix::<T>::zeros(n, n);
    for (i, u) in us.iter().enumerate() {
        let knot_span_index = knots.find_knot_span_index(span_max, degree, *u);
        let basis = knots.basis_functions(knot_span_index, *u, degree);
        let ls = knot_span_index - degree;
        for (j, b) in basis.into_iter().enumerate() {
            m_a[(i, ls + j)] = b;
        }
    }

    let lu = m_a.lu();
    let solved = (0..3)
        .map(|axis| {
            let b = DVector::from_iterator(n, points.iter().map(|p| p[axis]));
            lu.solve(&b).ok_or(anyhow::anyhow!("Solve failed"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let control_points = (0..n)
        .map(|i| Point4::new(solved[0][i], solved[1][i], solved[2][i], T::one()))
        .collect_vec();

    Ok((control_points, knots))
}
