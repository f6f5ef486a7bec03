use nalgebra::Vector3;

use crate::{
    curve::{AnyCurve, Arc, Curve, Line},
    error::GeometryError,
    misc::{is_parallel, FloatingPoint},
    surface::Surface,
};

use super::{curve_pair::is_endpoint, CurvePair};

/// A four-sided surface described by its boundary, grouped into pairs of opposite sides.
///
/// Perimeter curves are grouped by the direction of their chord: a curve whose chord is
/// parallel or anti-parallel to the chord of an earlier group within the angle tolerance
/// joins that group, otherwise it starts a new one. Groups keep the order of the perimeter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrimmedSurface<T: FloatingPoint> {
    sides: Vec<(Vector3<T>, CurvePair<T>)>,
    tolerance: T,
}

impl<T: FloatingPoint> TrimmedSurface<T> {
    /// Default angle tolerance in degrees
    pub fn default_tolerance() -> T {
        T::from_f64(60.).unwrap()
    }

    /// Parametrize the perimeter of a surface with an angle tolerance in degrees
    ///
    /// # Example
    /// ```
    /// use rebar_curves::prelude::*;
    /// use nalgebra::{Point3, Vector3};
    /// use approx::assert_relative_eq;
    ///
    /// let wall = PlaneSurface::new(Point3::origin(), Vector3::x() * 4., Vector3::z() * 3.);
    /// let trimmed = TrimmedSurface::try_new(&wall, 60.).unwrap();
    /// assert_eq!(trimmed.sides().len(), 2);
    ///
    /// let across = trimmed.curve_at_parameter(0.25, false).unwrap();
    /// assert_relative_eq!(across.start_point(), Point3::new(1., 0., 0.));
    /// assert_relative_eq!(across.end_point(), Point3::new(1., 0., 3.));
    /// ```
    pub fn try_new<S: Surface<T> + ?Sized>(surface: &S, tolerance: T) -> anyhow::Result<Self> {
        Self::try_from_perimeter(surface.perimeter_curves(), tolerance)
    }

    /// Parametrize a closed loop of curves with an angle tolerance in degrees
    pub fn try_from_perimeter<I>(curves: I, tolerance: T) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = AnyCurve<T>>,
    {
        let mut sides: Vec<(Vector3<T>, CurvePair<T>)> = vec![];
        for curve in curves {
            let direction = curve.end_point() - curve.start_point();
            match sides
                .iter_mut()
                .find(|(key, _)| is_parallel(&direction, key, tolerance))
            {
                Some((_, pair)) => pair.try_add(curve, tolerance)?,
                None => {
                    log::debug!("registering a new side along {:?}", direction);
                    sides.push((direction, CurvePair::new(curve)));
                }
            }
        }

        if sides.is_empty() {
            return Err(GeometryError::EmptyInput("perimeter curves").into());
        }

        Ok(Self { sides, tolerance })
    }

    /// Sides in perimeter order, keyed by the chord direction of their first curve
    pub fn sides(&self) -> &[(Vector3<T>, CurvePair<T>)] {
        &self.sides
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// The pair of sides the cross curves run between, and the pair they run along
    pub(crate) fn rails(&self, flip: bool) -> (&CurvePair<T>, &CurvePair<T>) {
        // sides is never empty
        let first = &self.sides[0].1;
        let last = &self.sides[self.sides.len() - 1].1;
        if flip {
            (last, first)
        } else {
            (first, last)
        }
    }

    /// A curve across the surface at a normalized parameter along its first side.
    /// With `flip` the curve runs between the other pair of sides.
    /// The result is an arc when the sides it runs along are curved, otherwise a line.
    pub fn curve_at_parameter(&self, t: T, flip: bool) -> anyhow::Result<AnyCurve<T>> {
        if t < T::zero() || t > T::one() {
            return Err(GeometryError::OutOfDomain {
                name: "parameter",
                value: t.to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }

        let (data, compare) = self.rails(flip);
        let first = data.first();
        let second = data.try_second()?;

        let a = first.start_point();
        let b = second.start_point();
        let start = first.point_at(t);
        // opposite sides of a loop usually run against each other
        let end = if compare.are_endpoints(&a, &b) {
            second.point_at(t)
        } else {
            second.point_at(T::one() - t)
        };

        let guide = compare.try_second()?;
        if compare.first().is_straight() && guide.is_straight() {
            return Ok(Line::new(start, end).into());
        }

        let half = T::from_f64(0.5).unwrap();
        let middle = Line::new(compare.first().point_at(half), guide.point_at(half));
        let parameter = if is_endpoint(compare.first(), &a) {
            t
        } else {
            T::one() - t
        };

        Ok(
            match Arc::try_from_three_points(&start, &middle.point_at(parameter), &end) {
                Ok(arc) => arc.into(),
                Err(_) => Line::new(start, end).into(),
            },
        )
    }
}
