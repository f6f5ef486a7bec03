pub mod any_surface;
pub mod plane_surface;
pub mod ruled_surface;
pub use any_surface::*;
pub use plane_surface::*;
pub use ruled_surface::*;

use nalgebra::{Point3, Vector3};

use crate::{
    curve::{AnyCurve, Line},
    intersects::{find_line_intersections, LineSurfaceIntersection},
    misc::FloatingPoint,
};

/// Evaluation contract for a parametric surface over the unit square [0, 1] x [0, 1].
pub trait Surface<T: FloatingPoint> {
    /// Evaluate the surface at a parameter pair
    fn point_at(&self, u: T, v: T) -> Point3<T>;

    /// Partial derivatives `(dS/du, dS/dv)` at a parameter pair
    fn derivatives_at(&self, u: T, v: T) -> (Vector3<T>, Vector3<T>);

    /// Unit normal `dS/du × dS/dv`
    /// At a degenerate point the normal is taken slightly towards the middle of the surface.
    fn normal_at(&self, u: T, v: T) -> Vector3<T> {
        let eps = T::default_epsilon();
        let (du, dv) = self.derivatives_at(u, v);
        if let Some(normal) = du.cross(&dv).try_normalize(eps) {
            return normal;
        }

        let half = T::from_f64(0.5).unwrap();
        let nudge = T::from_f64(1e-4).unwrap();
        let (du, dv) = self.derivatives_at(u + (half - u) * nudge, v + (half - v) * nudge);
        du.cross(&dv).try_normalize(eps).unwrap_or_else(Vector3::zeros)
    }

    /// Boundary curves forming a closed loop around the surface
    fn perimeter_curves(&self) -> Vec<AnyCurve<T>>;

    /// Find the points where a bounded line meets the surface, ordered along the line
    fn intersect_line(&self, line: &Line<T>) -> Vec<LineSurfaceIntersection<T>> {
        find_line_intersections(self, line)
    }

    /// Move every point of the surface along its normal by `distance`
    fn try_offset(&self, distance: T) -> anyhow::Result<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests;
