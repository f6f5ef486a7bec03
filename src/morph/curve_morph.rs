use itertools::Itertools;
use nalgebra::{Point3, Translation3};

use crate::{
    curve::{Curve, Line, NurbsCurve},
    error::GeometryError,
    misc::{points_almost_equal, try_transpose, FloatingPoint, Transformable},
    surface::{RuledSurface, Surface},
};

use super::{CurveAlignment, EndpointDistance, MorphOptions, MorphTo};

/// Highest degree of the fitted curves
const MAX_MORPH_DEGREE: usize = 3;

impl<T, A, B> MorphTo<T, B> for A
where
    T: FloatingPoint,
    A: Curve<T> + ?Sized,
    B: Curve<T> + ?Sized,
{
    /// Morph with the endpoint distance alignment
    ///
    /// # Example
    /// ```
    /// use rebar_curves::prelude::*;
    /// use nalgebra::Point3;
    /// use approx::assert_relative_eq;
    ///
    /// let bottom = Line::new(Point3::new(0., 0., 0.), Point3::new(2., 0., 0.));
    /// let top = Line::new(Point3::new(0., 3., 0.), Point3::new(2., 3., 0.));
    /// let options = MorphOptions::default().with_count(2);
    /// let curves = bottom.try_morph_to(&top, &options).unwrap();
    /// assert_eq!(curves.len(), 2);
    /// assert_relative_eq!(curves[0].start_point(), Point3::new(0., 1., 0.), epsilon = 1e-10);
    /// assert_relative_eq!(curves[1].end_point(), Point3::new(2., 2., 0.), epsilon = 1e-10);
    /// ```
    fn try_morph_to(
        &self,
        other: &B,
        options: &MorphOptions<T>,
    ) -> anyhow::Result<Vec<NurbsCurve<T>>> {
        try_morph_with(self, other, options, &EndpointDistance)
    }
}

/// Morph `first` into `second` with a custom alignment strategy
/// Columns where every construction line meets in one point are skipped.
pub fn try_morph_with<T, A, B, L>(
    first: &A,
    second: &B,
    options: &MorphOptions<T>,
    alignment: &L,
) -> anyhow::Result<Vec<NurbsCurve<T>>>
where
    T: FloatingPoint,
    A: Curve<T> + ?Sized,
    B: Curve<T> + ?Sized,
    L: CurveAlignment<T> + ?Sized,
{
    let precision = options.precision();
    if precision == 0 {
        return Err(GeometryError::InvalidDivision(precision).into());
    }

    let count = options.count();
    if count == 0 {
        return Ok(vec![]);
    }

    let first_samples = first.try_divide(precision)?;
    let mut second_samples = second.try_divide(precision)?;
    if alignment.should_reverse(&first_samples, &second_samples) {
        log::debug!("reversing the samples of the second curve to align both curves");
        second_samples.reverse();
    }

    // one row per construction line, count + 2 points including both ends
    let rows = first_samples
        .iter()
        .zip(second_samples.iter())
        .map(|(a, b)| Line::new(*a, *b).try_divide(count + 1))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let columns = try_transpose(&rows)?;

    let degree = precision.min(MAX_MORPH_DEGREE);
    let curves = columns[1..=count]
        .iter()
        .enumerate()
        .filter(|(i, column)| {
            let collapsed = column.iter().all(|p| points_almost_equal(p, &column[0]));
            if collapsed {
                log::debug!("skipping column {} collapsed to a single point", i + 1);
            }
            !collapsed
        })
        .map(|(_, column)| NurbsCurve::try_interpolate(column, degree))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let offset = options.offset();
    if offset == T::zero() {
        return Ok(curves);
    }

    let half = T::from_f64(0.5).unwrap();
    let normal = loft(&first_samples, &second_samples, degree)?.normal_at(half, half);
    let translation = Translation3::from(normal * offset);
    Ok(curves
        .into_iter()
        .map(|curve| curve.transformed(&translation))
        .collect_vec())
}

/// Ruled surface between the fitted samples of both curves
fn loft<T: FloatingPoint>(
    first: &[Point3<T>],
    second: &[Point3<T>],
    degree: usize,
) -> anyhow::Result<RuledSurface<T>> {
    Ok(RuledSurface::new(
        NurbsCurve::try_interpolate(first, degree)?.into(),
        NurbsCurve::try_interpolate(second, degree)?.into(),
    ))
}
