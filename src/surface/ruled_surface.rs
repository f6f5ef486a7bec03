use itertools::Itertools;
use nalgebra::{Point3, Vector3};

use crate::{
    curve::{AnyCurve, Curve, Line, NurbsCurve},
    misc::{FloatingPoint, Invertible},
};

use super::Surface;

/// Number of samples along each rail when approximating an offset
const OFFSET_SAMPLES: usize = 32;

/// A surface lofted by straight lines between two rail curves.
/// `u` runs along the rails and `v` from the first rail to the second.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuledSurface<T: FloatingPoint> {
    first: AnyCurve<T>,
    second: AnyCurve<T>,
}

impl<T: FloatingPoint> RuledSurface<T> {
    pub fn new(first: AnyCurve<T>, second: AnyCurve<T>) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &AnyCurve<T> {
        &self.first
    }

    pub fn second(&self) -> &AnyCurve<T> {
        &self.second
    }

    /// Sample a rail shifted along the surface normal and fit a curve through the samples
    fn offset_rail(&self, v: T, distance: T) -> anyhow::Result<AnyCurve<T>> {
        let n = T::from_usize(OFFSET_SAMPLES).unwrap();
        let points = (0..=OFFSET_SAMPLES)
            .map(|i| {
                let u = T::from_usize(i).unwrap() / n;
                self.point_at(u, v) + self.normal_at(u, v) * distance
            })
            .collect_vec();
        Ok(NurbsCurve::try_interpolate(&points, 3)?.into())
    }
}

impl<T: FloatingPoint> Surface<T> for RuledSurface<T> {
    fn point_at(&self, u: T, v: T) -> Point3<T> {
        let a = self.first.point_at(u);
        let b = self.second.point_at(u);
        a + (b - a) * v
    }

    fn derivatives_at(&self, u: T, v: T) -> (Vector3<T>, Vector3<T>) {
        let du = self.first.tangent_at(u) * (T::one() - v) + self.second.tangent_at(u) * v;
        let dv = self.second.point_at(u) - self.first.point_at(u);
        (du, dv)
    }

    fn perimeter_curves(&self) -> Vec<AnyCurve<T>> {
        vec![
            self.first.clone(),
            Line::new(self.first.end_point(), self.second.end_point()).into(),
            self.second.inverse(),
            Line::new(self.second.start_point(), self.first.start_point()).into(),
        ]
    }

    fn try_offset(&self, distance: T) -> anyhow::Result<Self> {
        Ok(Self::new(
            self.offset_rail(T::zero(), distance)?,
            self.offset_rail(T::one(), distance)?,
        ))
    }
}
