use nalgebra::{Point3, Translation3, Vector3};

use crate::misc::{FloatingPoint, Invertible, Transformable};

use super::Curve;

/// A straight, bounded line segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<T: FloatingPoint> {
    start: Point3<T>,
    end: Point3<T>,
}

impl<T: FloatingPoint> Line<T> {
    pub fn new(start: Point3<T>, end: Point3<T>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Point3<T> {
        &self.start
    }

    pub fn end(&self) -> &Point3<T> {
        &self.end
    }

    /// Vector from start to end
    pub fn direction(&self) -> Vector3<T> {
        self.end - self.start
    }

    /// The part of the line between two normalized parameters
    pub fn segment(&self, t0: T, t1: T) -> Self {
        Self::new(self.point_at(t0), self.point_at(t1))
    }

    /// Split the line into two at a normalized parameter
    pub fn split_at(&self, t: T) -> (Self, Self) {
        let mid = self.point_at(t);
        (Self::new(self.start, mid), Self::new(mid, self.end))
    }

    /// Move the start point backwards by `start` and the end point forwards by `end`
    /// Negative values shorten the line.
    pub fn extended(&self, start: T, end: T) -> anyhow::Result<Self> {
        let direction = self
            .direction()
            .try_normalize(T::default_epsilon())
            .ok_or(anyhow::anyhow!("Cannot extend a zero length line"))?;
        Ok(Self::new(
            self.start - direction * start,
            self.end + direction * end,
        ))
    }
}

impl<T: FloatingPoint> Curve<T> for Line<T> {
    fn point_at(&self, t: T) -> Point3<T> {
        self.start + (self.end - self.start) * t
    }

    fn tangent_at(&self, _t: T) -> Vector3<T> {
        self.direction()
    }

    fn start_point(&self) -> Point3<T> {
        self.start
    }

    fn end_point(&self) -> Point3<T> {
        self.end
    }

    fn length(&self) -> T {
        self.direction().norm()
    }

    fn length_at(&self, t: T) -> T {
        self.length() * t
    }

    fn parameter_at_length(&self, length: T) -> T {
        let total = self.length();
        if total <= T::default_epsilon() {
            T::zero()
        } else {
            (length / total).clamp(T::zero(), T::one())
        }
    }

    fn is_straight(&self) -> bool {
        true
    }
}

impl<T: FloatingPoint> Invertible for Line<T> {
    fn invert(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }
}

impl<'a, T: FloatingPoint> Transformable<&'a Translation3<T>> for Line<T> {
    fn transform(&mut self, transform: &'a Translation3<T>) {
        self.start = transform.transform_point(&self.start);
        self.end = transform.transform_point(&self.end);
    }
}
