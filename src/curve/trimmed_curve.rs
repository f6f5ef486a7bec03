use nalgebra::{Point3, Translation3, Vector3};

use crate::misc::{FloatingPoint, Invertible, Transformable};

use super::{AnyCurve, Curve};

/// A view on the part of a curve between two normalized parameters
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrimmedCurve<T: FloatingPoint> {
    basis: Box<AnyCurve<T>>,
    start: T,
    end: T,
}

impl<T: FloatingPoint> TrimmedCurve<T> {
    /// Trim `basis` to the parameter range [start, end]
    /// Trimming a trimmed curve composes the ranges instead of nesting them.
    pub fn new(basis: AnyCurve<T>, start: T, end: T) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        match basis {
            AnyCurve::Trimmed(inner) => {
                let width = inner.end - inner.start;
                Self {
                    start: inner.start + width * start,
                    end: inner.start + width * end,
                    basis: inner.basis,
                }
            }
            basis => Self {
                basis: Box::new(basis),
                start,
                end,
            },
        }
    }

    pub fn basis(&self) -> &AnyCurve<T> {
        &self.basis
    }

    /// Parameter range on the basis curve
    pub fn range(&self) -> (T, T) {
        (self.start, self.end)
    }

    fn to_basis(&self, t: T) -> T {
        self.start + (self.end - self.start) * t
    }
}

impl<T: FloatingPoint> Curve<T> for TrimmedCurve<T> {
    fn point_at(&self, t: T) -> Point3<T> {
        self.basis.point_at(self.to_basis(t))
    }

    fn tangent_at(&self, t: T) -> Vector3<T> {
        self.basis.tangent_at(self.to_basis(t)) * (self.end - self.start)
    }

    fn length_at(&self, t: T) -> T {
        self.basis.length_at(self.to_basis(t)) - self.basis.length_at(self.start)
    }
}

impl<T: FloatingPoint> Invertible for TrimmedCurve<T> {
    fn invert(&mut self) {
        self.basis.invert();
        let (start, end) = (T::one() - self.end, T::one() - self.start);
        self.start = start;
        self.end = end;
    }
}

impl<'a, T: FloatingPoint> Transformable<&'a Translation3<T>> for TrimmedCurve<T> {
    fn transform(&mut self, transform: &'a Translation3<T>) {
        self.basis.transform(transform);
    }
}
