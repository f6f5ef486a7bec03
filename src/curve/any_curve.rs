use nalgebra::{Point3, Translation3, Vector3};

use crate::misc::{FloatingPoint, Invertible, Transformable};

use super::{Arc, Curve, Line, NurbsCurve, PolyCurve, TrimmedCurve};

/// Any curve the crate produces or consumes
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyCurve<T: FloatingPoint> {
    Line(Line<T>),
    Arc(Arc<T>),
    Nurbs(NurbsCurve<T>),
    Poly(PolyCurve<T>),
    Trimmed(TrimmedCurve<T>),
}

macro_rules! dispatch {
    ($self:ident, $curve:ident => $body:expr) => {
        match $self {
            AnyCurve::Line($curve) => $body,
            AnyCurve::Arc($curve) => $body,
            AnyCurve::Nurbs($curve) => $body,
            AnyCurve::Poly($curve) => $body,
            AnyCurve::Trimmed($curve) => $body,
        }
    };
}

impl<T: FloatingPoint> AnyCurve<T> {
    /// Split the curve into two at a normalized parameter
    /// Lines and arcs split into lines and arcs, other curves into trimmed views.
    pub fn split_at(&self, t: T) -> (Self, Self) {
        match self {
            AnyCurve::Line(line) => {
                let (a, b) = line.split_at(t);
                (a.into(), b.into())
            }
            AnyCurve::Arc(arc) => {
                let (a, b) = arc.split_at(t);
                (a.into(), b.into())
            }
            other => (
                TrimmedCurve::new(other.clone(), T::zero(), t).into(),
                TrimmedCurve::new(other.clone(), t, T::one()).into(),
            ),
        }
    }

    /// The part of the curve between two normalized parameters
    pub fn sub_curve(&self, t0: T, t1: T) -> Self {
        match self {
            AnyCurve::Line(line) => line.segment(t0, t1).into(),
            AnyCurve::Arc(arc) => {
                let (_, tail) = arc.split_at(t0);
                let width = T::one() - t0;
                if width <= T::default_epsilon() {
                    return tail.into();
                }
                let (head, _) = tail.split_at((t1 - t0) / width);
                head.into()
            }
            other => TrimmedCurve::new(other.clone(), t0, t1).into(),
        }
    }
}

impl<T: FloatingPoint> Curve<T> for AnyCurve<T> {
    fn point_at(&self, t: T) -> Point3<T> {
        dispatch!(self, c => c.point_at(t))
    }

    fn tangent_at(&self, t: T) -> Vector3<T> {
        dispatch!(self, c => c.tangent_at(t))
    }

    fn start_point(&self) -> Point3<T> {
        dispatch!(self, c => c.start_point())
    }

    fn end_point(&self) -> Point3<T> {
        dispatch!(self, c => c.end_point())
    }

    fn length(&self) -> T {
        dispatch!(self, c => c.length())
    }

    fn length_at(&self, t: T) -> T {
        dispatch!(self, c => c.length_at(t))
    }

    fn parameter_at_length(&self, length: T) -> T {
        dispatch!(self, c => c.parameter_at_length(length))
    }

    fn is_straight(&self) -> bool {
        dispatch!(self, c => c.is_straight())
    }
}

impl<T: FloatingPoint> Invertible for AnyCurve<T> {
    fn invert(&mut self) {
        dispatch!(self, c => c.invert())
    }
}

impl<'a, T: FloatingPoint> Transformable<&'a Translation3<T>> for AnyCurve<T> {
    fn transform(&mut self, transform: &'a Translation3<T>) {
        dispatch!(self, c => c.transform(transform))
    }
}

impl<T: FloatingPoint> From<Line<T>> for AnyCurve<T> {
    fn from(value: Line<T>) -> Self {
        AnyCurve::Line(value)
    }
}

impl<T: FloatingPoint> From<Arc<T>> for AnyCurve<T> {
    fn from(value: Arc<T>) -> Self {
        AnyCurve::Arc(value)
    }
}

impl<T: FloatingPoint> From<NurbsCurve<T>> for AnyCurve<T> {
    fn from(value: NurbsCurve<T>) -> Self {
        AnyCurve::Nurbs(value)
    }
}

impl<T: FloatingPoint> From<PolyCurve<T>> for AnyCurve<T> {
    fn from(value: PolyCurve<T>) -> Self {
        AnyCurve::Poly(value)
    }
}

impl<T: FloatingPoint> From<TrimmedCurve<T>> for AnyCurve<T> {
    fn from(value: TrimmedCurve<T>) -> Self {
        AnyCurve::Trimmed(value)
    }
}
