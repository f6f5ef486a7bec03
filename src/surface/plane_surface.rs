use nalgebra::{Matrix3, Point3, Translation3, Vector3};

use crate::{
    curve::{AnyCurve, Line},
    intersects::LineSurfaceIntersection,
    misc::{FloatingPoint, Transformable},
};

use super::Surface;

/// A flat parallelogram patch spanned by two edge vectors from an origin corner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneSurface<T: FloatingPoint> {
    origin: Point3<T>,
    u_axis: Vector3<T>,
    v_axis: Vector3<T>,
}

impl<T: FloatingPoint> PlaneSurface<T> {
    /// Create a patch `origin + u * u_axis + v * v_axis`
    ///
    /// # Example
    /// ```
    /// use rebar_curves::prelude::*;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let square = PlaneSurface::new(Point3::origin(), Vector3::x(), Vector3::y());
    /// assert_eq!(square.point_at(0.5, 1.0), Point3::new(0.5, 1.0, 0.0));
    /// assert_eq!(square.normal_at(0.5, 0.5), Vector3::z());
    /// assert_eq!(square.perimeter_curves().len(), 4);
    /// ```
    pub fn new(origin: Point3<T>, u_axis: Vector3<T>, v_axis: Vector3<T>) -> Self {
        Self {
            origin,
            u_axis,
            v_axis,
        }
    }

    pub fn origin(&self) -> &Point3<T> {
        &self.origin
    }

    pub fn u_axis(&self) -> &Vector3<T> {
        &self.u_axis
    }

    pub fn v_axis(&self) -> &Vector3<T> {
        &self.v_axis
    }
}

impl<T: FloatingPoint> Surface<T> for PlaneSurface<T> {
    fn point_at(&self, u: T, v: T) -> Point3<T> {
        self.origin + self.u_axis * u + self.v_axis * v
    }

    fn derivatives_at(&self, _u: T, _v: T) -> (Vector3<T>, Vector3<T>) {
        (self.u_axis, self.v_axis)
    }

    fn perimeter_curves(&self) -> Vec<AnyCurve<T>> {
        let corners = [
            self.origin,
            self.origin + self.u_axis,
            self.origin + self.u_axis + self.v_axis,
            self.origin + self.v_axis,
        ];
        (0..4)
            .map(|i| AnyCurve::from(Line::new(corners[i], corners[(i + 1) % 4])))
            .collect()
    }

    /// Solve `origin + u U + v V = start + s D` directly
    fn intersect_line(&self, line: &Line<T>) -> Vec<LineSurfaceIntersection<T>> {
        let direction = line.direction();
        let system = Matrix3::from_columns(&[self.u_axis, self.v_axis, -direction]);
        let rhs = line.start() - self.origin;
        let solution = match system.lu().solve(&rhs) {
            Some(solution) => solution,
            None => return vec![],
        };

        let (u, v, s) = (solution.x, solution.y, solution.z);
        let eps = T::from_f64(1e-9).unwrap();
        let inside = |x: T| x >= -eps && x <= T::one() + eps;
        if !(inside(u) && inside(v) && inside(s)) {
            return vec![];
        }

        let s = s.clamp(T::zero(), T::one());
        vec![LineSurfaceIntersection::new(
            line.start() + direction * s,
            s,
            (u.clamp(T::zero(), T::one()), v.clamp(T::zero(), T::one())),
        )]
    }

    fn try_offset(&self, distance: T) -> anyhow::Result<Self> {
        let normal = self
            .u_axis
            .cross(&self.v_axis)
            .try_normalize(T::default_epsilon())
            .ok_or(anyhow::anyhow!("Cannot offset a degenerate plane surface"))?;
        Ok(self.transformed(&Translation3::from(normal * distance)))
    }
}

impl<'a, T: FloatingPoint> Transformable<&'a Translation3<T>> for PlaneSurface<T> {
    fn transform(&mut self, transform: &'a Translation3<T>) {
        self.origin = transform.transform_point(&self.origin);
    }
}
