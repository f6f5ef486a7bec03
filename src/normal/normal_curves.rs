use std::cmp::Ordering;

use itertools::Itertools;
use nalgebra::{Point3, Vector3};

use crate::{
    curve::Line,
    error::GeometryError,
    misc::{almost_equal, FloatingPoint},
    surface::Surface,
};

use super::NormalCurveOptions;

/// Cast straight curves along the normal of a surface until they meet the boundary surfaces.
///
/// Points are placed at the interior parameters `i / (count + 1)` of a parameter line at
/// `options.height()`. From each point a ray runs along the surface normal, or against it when
/// the normal side has no boundary. The ray is split at the boundary hits and the segments
/// between the start and the first hit, the second and the third hit and so on are kept,
/// with the cover `options.offset()` applied at both ends.
/// Positions without any hit are skipped.
///
/// # Example
/// ```
/// use rebar_curves::prelude::*;
/// use nalgebra::{Point3, Vector3};
/// use approx::assert_relative_eq;
///
/// let slab = PlaneSurface::new(Point3::origin(), Vector3::x(), Vector3::y());
/// let top = PlaneSurface::new(Point3::new(0., 0., 0.3), Vector3::x(), Vector3::y());
/// let options = NormalCurveOptions::default().with_count(3);
/// let curves = try_normal_curves(&slab, &[top], &options).unwrap();
/// assert_eq!(curves.len(), 3);
/// assert_relative_eq!(curves[0].length(), 0.3, epsilon = 1e-9);
/// ```
pub fn try_normal_curves<T, S, B>(
    surface: &S,
    boundaries: &[B],
    options: &NormalCurveOptions<T>,
) -> anyhow::Result<Vec<Line<T>>>
where
    T: FloatingPoint,
    S: Surface<T> + ?Sized,
    B: Surface<T>,
{
    if boundaries.is_empty() {
        return Err(GeometryError::EmptyInput("boundaries").into());
    }
    let height = options.height();
    if height < T::zero() || height > T::one() {
        return Err(GeometryError::OutOfDomain {
            name: "height",
            value: height.to_f64().unwrap_or(f64::NAN),
        }
        .into());
    }

    let along_u = sweeps_along_u(surface, height) == options.horizontal();
    log::debug!(
        "casting {} normal curves along {}",
        options.count(),
        if along_u { "u" } else { "v" }
    );

    let count = options.count();
    let denominator = T::from_usize(count + 1).unwrap();
    let offset = options.offset();

    let mut curves = vec![];
    for i in 1..=count {
        let parameter = T::from_usize(i).unwrap() / denominator;
        let (u, v) = if along_u {
            (parameter, height)
        } else {
            (height, parameter)
        };

        let normal = surface.normal_at(u, v);
        if normal == Vector3::zeros() {
            log::debug!("skipping degenerate normal at ({u}, {v})");
            continue;
        }

        let point = surface.point_at(u, v);
        let (start, direction, hits) =
            match cast(&point, &normal, offset, boundaries, options.ray_length()) {
                Some((start, hits)) => (start, normal, hits),
                None => match cast(&point, &-normal, offset, boundaries, options.ray_length()) {
                    Some((start, hits)) => (start, -normal, hits),
                    None => {
                        log::debug!("no boundary found from ({u}, {v}) in either direction");
                        continue;
                    }
                },
            };

        let stops = std::iter::once(T::zero()).chain(hits).collect_vec();
        curves.extend(
            stops
                .iter()
                .tuple_windows()
                .step_by(2)
                .filter(|(near, far)| **far - **near > offset)
                .map(|(near, far)| {
                    Line::new(
                        start + direction * *near,
                        start + direction * (*far - offset),
                    )
                }),
        );
    }

    Ok(curves)
}

/// Check if the parameter line at `height` runs along u.
/// A line across u whose ends share the same x coordinate is considered vertical.
fn sweeps_along_u<T: FloatingPoint, S: Surface<T> + ?Sized>(surface: &S, height: T) -> bool {
    let a = surface.point_at(T::zero(), height);
    let b = surface.point_at(T::one(), height);
    !almost_equal(a.x, b.x)
}

/// Start of the ray, covered by `offset` along `direction`, and the distances from it to the
/// boundary hits, sorted and deduplicated.
/// Hits at the start itself are ignored.
fn cast<T: FloatingPoint, B: Surface<T>>(
    point: &Point3<T>,
    direction: &Vector3<T>,
    offset: T,
    boundaries: &[B],
    ray_length: T,
) -> Option<(Point3<T>, Vec<T>)> {
    let start = point + direction * offset;
    let ray = Line::new(start, start + direction * ray_length);
    let tolerance = T::point_tolerance();
    let hits = boundaries
        .iter()
        .flat_map(|boundary| boundary.intersect_line(&ray))
        .map(|hit| hit.parameter() * ray_length)
        .filter(|distance| *distance > tolerance)
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .coalesce(|a, b| {
            if b - a < tolerance {
                Ok(a)
            } else {
                Err((a, b))
            }
        })
        .collect_vec();
    if hits.is_empty() {
        None
    } else {
        Some((start, hits))
    }
}
