use nalgebra::{Point3, Translation3, Vector3};

use crate::misc::{points_almost_equal, FloatingPoint, Invertible, Transformable};

use super::{AnyCurve, Curve};

/// A chain of contiguous curves evaluated as one curve.
/// The normalized parameter is distributed over the spans by their length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolyCurve<T: FloatingPoint> {
    spans: Vec<AnyCurve<T>>,
    /// normalized parameter at the start of each span, followed by 1
    breaks: Vec<T>,
    length: T,
}

impl<T: FloatingPoint> PolyCurve<T> {
    /// Create a polycurve from spans where each span ends where the next one starts
    /// Nested polycurves are flattened.
    pub fn try_new(spans: Vec<AnyCurve<T>>) -> anyhow::Result<Self> {
        let spans = spans
            .into_iter()
            .flat_map(|span| match span {
                AnyCurve::Poly(poly) => poly.spans,
                other => vec![other],
            })
            .collect::<Vec<_>>();

        anyhow::ensure!(!spans.is_empty(), "A polycurve needs at least one span");
        if let Some(index) = spans
            .windows(2)
            .position(|w| !points_almost_equal(&w[0].end_point(), &w[1].start_point()))
        {
            anyhow::bail!("Span {} does not connect to span {}", index, index + 1);
        }

        let lengths = spans.iter().map(|s| s.length()).collect::<Vec<_>>();
        let length = lengths.iter().fold(T::zero(), |acc, l| acc + *l);
        anyhow::ensure!(
            length > T::default_epsilon(),
            "A polycurve must not have zero length"
        );

        let mut breaks = vec![T::zero()];
        let mut acc = T::zero();
        for l in lengths.iter() {
            acc += *l;
            breaks.push(acc / length);
        }
        if let Some(last) = breaks.last_mut() {
            *last = T::one();
        }

        Ok(Self {
            spans,
            breaks,
            length,
        })
    }

    /// Join two curves that share an end point, in whichever order connects them
    ///
    /// # Example
    /// ```
    /// use rebar_curves::prelude::*;
    /// use nalgebra::Point3;
    ///
    /// let a = Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    /// let b = Line::new(Point3::new(-2.0, 0.0, 0.0), Point3::new(0.0, 0.0, 0.0));
    /// let joined = PolyCurve::try_join(AnyCurve::Line(a), AnyCurve::Line(b)).unwrap();
    /// assert_eq!(joined.start_point(), Point3::new(-2.0, 0.0, 0.0));
    /// assert_eq!(joined.end_point(), Point3::new(1.0, 0.0, 0.0));
    /// assert_eq!(joined.length(), 3.0);
    /// ```
    pub fn try_join(a: AnyCurve<T>, b: AnyCurve<T>) -> anyhow::Result<Self> {
        if points_almost_equal(&a.end_point(), &b.start_point()) {
            Self::try_new(vec![a, b])
        } else if points_almost_equal(&b.end_point(), &a.start_point()) {
            Self::try_new(vec![b, a])
        } else {
            anyhow::bail!("Curves do not share an end point")
        }
    }

    pub fn spans(&self) -> &[AnyCurve<T>] {
        &self.spans
    }

    /// Find the span containing `t` and the parameter local to it
    fn locate(&self, t: T) -> (usize, T) {
        let t = t.clamp(T::zero(), T::one());
        let last = self.spans.len() - 1;
        let index = (0..last)
            .find(|i| t < self.breaks[i + 1])
            .unwrap_or(last);
        let width = self.breaks[index + 1] - self.breaks[index];
        if width <= T::default_epsilon() {
            (index, T::zero())
        } else {
            (index, ((t - self.breaks[index]) / width).clamp(T::zero(), T::one()))
        }
    }
}

impl<T: FloatingPoint> Curve<T> for PolyCurve<T> {
    fn point_at(&self, t: T) -> Point3<T> {
        let (index, local) = self.locate(t);
        self.spans[index].point_at(local)
    }

    fn tangent_at(&self, t: T) -> Vector3<T> {
        let (index, local) = self.locate(t);
        let width = self.breaks[index + 1] - self.breaks[index];
        if width <= T::default_epsilon() {
            return Vector3::zeros();
        }
        self.spans[index].tangent_at(local) / width
    }

    fn start_point(&self) -> Point3<T> {
        self.spans[0].start_point()
    }

    fn end_point(&self) -> Point3<T> {
        self.spans[self.spans.len() - 1].end_point()
    }

    fn length(&self) -> T {
        self.length
    }

    fn length_at(&self, t: T) -> T {
        let (index, local) = self.locate(t);
        self.length * self.breaks[index] + self.spans[index].length_at(local)
    }
}

impl<T: FloatingPoint> Invertible for PolyCurve<T> {
    fn invert(&mut self) {
        self.spans.reverse();
        self.spans.iter_mut().for_each(|s| s.invert());
        let breaks = self
            .breaks
            .iter()
            .rev()
            .map(|b| T::one() - *b)
            .collect();
        self.breaks = breaks;
    }
}

impl<'a, T: FloatingPoint> Transformable<&'a Translation3<T>> for PolyCurve<T> {
    fn transform(&mut self, transform: &'a Translation3<T>) {
        self.spans.iter_mut().for_each(|s| s.transform(transform));
    }
}
