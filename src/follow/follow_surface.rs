use std::borrow::Cow;

use crate::{
    curve::{AnyCurve, Curve, NurbsCurve},
    error::GeometryError,
    misc::FloatingPoint,
    surface::Surface,
    trimmed::TrimmedSurface,
};

use super::{FollowMode, FollowOptions};

/// Highest degree of iso-parametric curves
const FOLLOW_DEGREE: usize = 3;

/// Cover a surface with a family of evenly spaced curves.
///
/// The surface is first offset along its normal by `options.offset()`. The number of
/// divisions is `floor(reference length / spacing)` when a spacing is given, `options.count()`
/// otherwise, and a curve is built at every interior division `j / divisions`.
/// The curves at 0 and 1 are added on request.
///
/// # Example
/// ```
/// use rebar_curves::prelude::*;
/// use nalgebra::{Point3, Vector3};
/// use approx::assert_relative_eq;
///
/// let square = PlaneSurface::new(Point3::origin(), Vector3::x(), Vector3::y());
/// let options = FollowOptions::default().with_precision(10).with_count(4);
/// let curves = try_follow(&square, &options).unwrap();
/// assert_eq!(curves.len(), 3);
/// assert_relative_eq!(curves[0].start_point(), Point3::new(0., 0.25, 0.), epsilon = 1e-10);
/// assert_relative_eq!(curves[0].length(), 1., epsilon = 1e-8);
/// ```
pub fn try_follow<T, S>(surface: &S, options: &FollowOptions<T>) -> anyhow::Result<Vec<AnyCurve<T>>>
where
    T: FloatingPoint,
    S: Surface<T> + Clone,
{
    let surface: Cow<'_, S> = if options.offset() != T::zero() {
        Cow::Owned(surface.try_offset(options.offset())?)
    } else {
        Cow::Borrowed(surface)
    };
    let surface = surface.as_ref();

    let flip = options.flip();
    match options.mode() {
        FollowMode::IsoParametric => {
            let precision = options.precision();
            if precision == 0 {
                return Err(GeometryError::InvalidDivision(precision).into());
            }
            let corner = surface.point_at(T::zero(), T::zero());
            let across = if flip {
                surface.point_at(T::one(), T::zero())
            } else {
                surface.point_at(T::zero(), T::one())
            };
            let reference = (across - corner).norm();
            follow_heights(reference, options, |height| {
                iso_curve(surface, height, precision, flip)
            })
        }
        FollowMode::Perimeter => {
            let trimmed = TrimmedSurface::try_new(surface, options.angle_tolerance())?;
            let (data, _) = trimmed.rails(flip);
            let reference = data.first().length();
            follow_heights(reference, options, |height| {
                trimmed.curve_at_parameter(height, flip)
            })
        }
    }
}

/// Number of divisions across the surface
/// A spacing wider than the reference length leaves a single division, so only the
/// requested edges are followed.
fn divisions<T: FloatingPoint>(reference: T, options: &FollowOptions<T>) -> anyhow::Result<usize> {
    let spacing = options.spacing();
    if spacing > T::zero() {
        let count = (reference / spacing).floor().to_usize().unwrap_or(0);
        if count <= 1 {
            log::debug!("spacing is not smaller than the reference length, no interior curves");
        }
        Ok(count.max(1))
    } else if options.count() == 0 {
        Err(GeometryError::InvalidDivision(0).into())
    } else {
        Ok(options.count())
    }
}

fn follow_heights<T, F>(
    reference: T,
    options: &FollowOptions<T>,
    curve_at: F,
) -> anyhow::Result<Vec<AnyCurve<T>>>
where
    T: FloatingPoint,
    F: Fn(T) -> anyhow::Result<AnyCurve<T>>,
{
    let divisions = divisions(reference, options)?;
    log::debug!("following the surface with {divisions} divisions");

    let n = T::from_usize(divisions).unwrap();
    let mut curves = vec![];
    if options.include_first_edge() {
        curves.push(curve_at(T::zero())?);
    }
    for j in 1..divisions {
        curves.push(curve_at(T::from_usize(j).unwrap() / n)?);
    }
    if options.include_last_edge() {
        curves.push(curve_at(T::one())?);
    }
    Ok(curves)
}

/// Fit a curve through samples of the parameter line at `height`
fn iso_curve<T: FloatingPoint, S: Surface<T> + ?Sized>(
    surface: &S,
    height: T,
    precision: usize,
    flip: bool,
) -> anyhow::Result<AnyCurve<T>> {
    let n = T::from_usize(precision).unwrap();
    let points = (0..=precision)
        .map(|i| {
            let t = T::from_usize(i).unwrap() / n;
            if flip {
                surface.point_at(height, t)
            } else {
                surface.point_at(t, height)
            }
        })
        .collect::<Vec<_>>();
    Ok(NurbsCurve::try_interpolate(&points, FOLLOW_DEGREE)?.into())
}
