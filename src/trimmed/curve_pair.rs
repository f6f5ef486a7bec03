use nalgebra::Point3;

use crate::{
    curve::{AnyCurve, Curve, PolyCurve},
    error::GeometryError,
    misc::{points_almost_equal, FloatingPoint},
};

/// Two boundary curves running in the same direction on opposite sides of a surface.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePair<T: FloatingPoint> {
    first: AnyCurve<T>,
    second: Option<AnyCurve<T>>,
}

impl<T: FloatingPoint> CurvePair<T> {
    pub fn new(first: AnyCurve<T>) -> Self {
        Self {
            first,
            second: None,
        }
    }

    pub fn first(&self) -> &AnyCurve<T> {
        &self.first
    }

    pub fn second(&self) -> Option<&AnyCurve<T>> {
        self.second.as_ref()
    }

    /// The opposite curve, an error if the side has only one curve
    pub fn try_second(&self) -> anyhow::Result<&AnyCurve<T>> {
        self.second
            .as_ref()
            .ok_or(anyhow::anyhow!("Surface side has no opposite curve"))
    }

    /// Add a curve to this side of the surface.
    /// A curve connecting to `first` or `second` is joined to it,
    /// any other curve becomes `second` unless that is already taken.
    pub fn try_add(&mut self, curve: AnyCurve<T>, tolerance: T) -> anyhow::Result<()> {
        if connects(&self.first, &curve) {
            self.first = PolyCurve::try_join(curve, self.first.clone())?.into();
            return Ok(());
        }

        match self.second.take() {
            Some(second) if connects(&second, &curve) => {
                self.second = Some(PolyCurve::try_join(curve, second)?.into());
                Ok(())
            }
            Some(second) => {
                self.second = Some(second);
                Err(GeometryError::Unparametrizable {
                    tolerance: tolerance.to_f64().unwrap_or(f64::NAN),
                }
                .into())
            }
            None => {
                self.second = Some(curve);
                Ok(())
            }
        }
    }

    /// Check if both points are end points of the same curve of the pair
    pub fn are_endpoints(&self, a: &Point3<T>, b: &Point3<T>) -> bool {
        let on = |curve: &AnyCurve<T>| is_endpoint(curve, a) && is_endpoint(curve, b);
        on(&self.first) || self.second.as_ref().is_some_and(on)
    }
}

/// Check if `point` is the start or the end of `curve`
pub(crate) fn is_endpoint<T: FloatingPoint>(curve: &AnyCurve<T>, point: &Point3<T>) -> bool {
    points_almost_equal(&curve.start_point(), point) || points_almost_equal(&curve.end_point(), point)
}

fn connects<T: FloatingPoint>(existing: &AnyCurve<T>, curve: &AnyCurve<T>) -> bool {
    points_almost_equal(&existing.start_point(), &curve.end_point())
        || points_almost_equal(&existing.end_point(), &curve.start_point())
}
