use nalgebra::{Point3, Vector3};

use crate::{
    curve::{AnyCurve, Line},
    intersects::LineSurfaceIntersection,
    misc::FloatingPoint,
};

use super::{PlaneSurface, RuledSurface, Surface};

/// Any surface the crate can evaluate
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnySurface<T: FloatingPoint> {
    Plane(PlaneSurface<T>),
    Ruled(RuledSurface<T>),
}

impl<T: FloatingPoint> Surface<T> for AnySurface<T> {
    fn point_at(&self, u: T, v: T) -> Point3<T> {
        match self {
            AnySurface::Plane(s) => s.point_at(u, v),
            AnySurface::Ruled(s) => s.point_at(u, v),
        }
    }

    fn derivatives_at(&self, u: T, v: T) -> (Vector3<T>, Vector3<T>) {
        match self {
            AnySurface::Plane(s) => s.derivatives_at(u, v),
            AnySurface::Ruled(s) => s.derivatives_at(u, v),
        }
    }

    fn normal_at(&self, u: T, v: T) -> Vector3<T> {
        match self {
            AnySurface::Plane(s) => s.normal_at(u, v),
            AnySurface::Ruled(s) => s.normal_at(u, v),
        }
    }

    fn perimeter_curves(&self) -> Vec<AnyCurve<T>> {
        match self {
            AnySurface::Plane(s) => s.perimeter_curves(),
            AnySurface::Ruled(s) => s.perimeter_curves(),
        }
    }

    fn intersect_line(&self, line: &Line<T>) -> Vec<LineSurfaceIntersection<T>> {
        match self {
            AnySurface::Plane(s) => s.intersect_line(line),
            AnySurface::Ruled(s) => s.intersect_line(line),
        }
    }

    fn try_offset(&self, distance: T) -> anyhow::Result<Self> {
        Ok(match self {
            AnySurface::Plane(s) => AnySurface::Plane(s.try_offset(distance)?),
            AnySurface::Ruled(s) => AnySurface::Ruled(s.try_offset(distance)?),
        })
    }
}

impl<T: FloatingPoint> From<PlaneSurface<T>> for AnySurface<T> {
    fn from(value: PlaneSurface<T>) -> Self {
        AnySurface::Plane(value)
    }
}

impl<T: FloatingPoint> From<RuledSurface<T>> for AnySurface<T> {
    fn from(value: RuledSurface<T>) -> Self {
        AnySurface::Ruled(value)
    }
}
