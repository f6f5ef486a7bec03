use std::cmp::Ordering;

use itertools::Itertools;
use nalgebra::{Matrix3, Point3, Vector3};

use crate::{curve::Line, misc::FloatingPoint, surface::Surface};

use super::LineIntersectionSolverOptions;

/// A point where a line meets a surface.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSurfaceIntersection<T: FloatingPoint> {
    point: Point3<T>,
    /// Normalized parameter along the line.
    parameter: T,
    /// Surface parameters.
    uv: (T, T),
}

impl<T: FloatingPoint> LineSurfaceIntersection<T> {
    pub fn new(point: Point3<T>, parameter: T, uv: (T, T)) -> Self {
        Self {
            point,
            parameter,
            uv,
        }
    }

    pub fn point(&self) -> &Point3<T> {
        &self.point
    }

    pub fn parameter(&self) -> T {
        self.parameter
    }

    pub fn uv(&self) -> (T, T) {
        self.uv
    }
}

/// Intersect a bounded line with a surface using the default solver options
pub fn find_line_intersections<T: FloatingPoint, S: Surface<T> + ?Sized>(
    surface: &S,
    line: &Line<T>,
) -> Vec<LineSurfaceIntersection<T>> {
    find_line_intersections_with(surface, line, &LineIntersectionSolverOptions::default())
}

/// Intersect a bounded line with a surface.
/// Solves `S(u, v) - (start + s * direction) = 0` by Newton iteration from a grid of seeds,
/// then merges coincident results and orders them along the line.
pub fn find_line_intersections_with<T: FloatingPoint, S: Surface<T> + ?Sized>(
    surface: &S,
    line: &Line<T>,
    options: &LineIntersectionSolverOptions<T>,
) -> Vec<LineSurfaceIntersection<T>> {
    let start = *line.start();
    let direction = line.direction();
    let length_squared = direction.norm_squared();
    if length_squared <= T::default_epsilon() {
        return vec![];
    }

    let division = options.seed_division.max(1);
    let cell = T::one() / T::from_usize(division).unwrap();
    let half = T::from_f64(0.5).unwrap();

    let found = (0..division)
        .cartesian_product(0..division)
        .filter_map(|(i, j)| {
            let u = (T::from_usize(i).unwrap() + half) * cell;
            let v = (T::from_usize(j).unwrap() + half) * cell;
            let seed = surface.point_at(u, v);
            let s = ((seed - start).dot(&direction) / length_squared).clamp(T::zero(), T::one());
            solve(surface, &start, &direction, Vector3::new(u, v, s), options)
        })
        .sorted_by(|a, b| {
            a.parameter
                .partial_cmp(&b.parameter)
                .unwrap_or(Ordering::Equal)
        })
        .collect_vec();

    found
        .into_iter()
        .coalesce(|x, y| {
            if (x.point - y.point).norm() < options.minimum_distance {
                Ok(x)
            } else {
                Err((x, y))
            }
        })
        .collect()
}

fn solve<T: FloatingPoint, S: Surface<T> + ?Sized>(
    surface: &S,
    start: &Point3<T>,
    direction: &Vector3<T>,
    init: Vector3<T>,
    options: &LineIntersectionSolverOptions<T>,
) -> Option<LineSurfaceIntersection<T>> {
    let clamp = |x: T| x.clamp(T::zero(), T::one());
    let residual = |x: &Vector3<T>| surface.point_at(x.x, x.y) - (start + direction * x.z);

    let mut x = init;
    for _ in 0..options.max_iters {
        let f = residual(&x);
        if f.norm_squared() < options.cost_tolerance {
            break;
        }
        let (du, dv) = surface.derivatives_at(x.x, x.y);
        let jacobian = Matrix3::from_columns(&[du, dv, -direction]);
        let step = jacobian.lu().solve(&(-f))?;
        let next = Vector3::new(clamp(x.x + step.x), clamp(x.y + step.y), clamp(x.z + step.z));
        if next == x {
            break;
        }
        x = next;
    }

    let point = surface.point_at(x.x, x.y);
    if (point - (start + direction * x.z)).norm() < options.minimum_distance {
        Some(LineSurfaceIntersection::new(point, x.z, (x.x, x.y)))
    } else {
        None
    }
}
