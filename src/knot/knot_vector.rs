use std::ops::Index;

use crate::misc::{FloatingPoint, Invertible};

/// Knot vector representation
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnotVector<T>(Vec<T>);

impl<T: FloatingPoint> KnotVector<T> {
    pub fn new(knots: Vec<T>) -> Self {
        Self(knots)
    }

    /// Create a clamped knot vector over [0, 1] with evenly spaced interior knots
    /// # Example
    /// ```
    /// use rebar_curves::prelude::KnotVector;
    /// let knots: KnotVector<f64> = KnotVector::clamped_uniform(4, 1);
    /// assert_eq!(knots.as_slice(), &[0., 0., 1. / 3., 2. / 3., 1., 1.]);
    /// ```
    pub fn clamped_uniform(control_points: usize, degree: usize) -> Self {
        let spans = control_points - degree;
        let mut knots = vec![T::zero(); degree + 1];
        for i in 1..spans {
            knots.push(T::from_usize(i).unwrap() / T::from_usize(spans).unwrap());
        }
        knots.extend(std::iter::repeat_n(T::one(), degree + 1));
        Self(knots)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Get the domain of the knot vector by degree
    pub fn domain(&self, degree: usize) -> (T, T) {
        (self.0[degree], self.0[self.0.len() - 1 - degree])
    }

    /// Find the knot span index by binary search
    ///
    /// # Example
    /// ```
    /// use rebar_curves::prelude::KnotVector;
    /// let knots = KnotVector::new(vec![0., 0., 0., 1., 2., 3., 3., 3.]);
    /// let idx = knots.find_knot_span_index(4, 2, 2.5);
    /// assert_eq!(idx, 4);
    /// ```
    pub fn find_knot_span_index(&self, n: usize, degree: usize, u: T) -> usize {
        if u > self[n + 1] - T::default_epsilon() {
            return n;
        }

        if u < self[degree] + T::default_epsilon() {
            return degree;
        }

        let mut low = degree;
        let mut high = n + 1;
        let mut mid = (low + high) / 2;
        while u < self[mid] || self[mid + 1] <= u {
            if u < self[mid] {
                high = mid;
            } else {
                low = mid;
            }
            let next = (low + high) / 2;
            if mid == next {
                break;
            }
            mid = next;
        }

        mid
    }

    /// Compute the non-vanishing basis functions
    pub fn basis_functions(&self, knot_span_index: usize, u: T, degree: usize) -> Vec<T> {
        let mut basis_functions = vec![T::zero(); degree + 1];
        let mut left = vec![T::zero(); degree + 1];
        let mut right = vec![T::zero(); degree + 1];

        basis_functions[0] = T::one();

        for j in 1..=degree {
            left[j] = u - self[knot_span_index + 1 - j];
            right[j] = self[knot_span_index + j] - u;
            let mut saved = T::zero();

            for r in 0..j {
                let temp = basis_functions[r] / (right[r + 1] + left[j - r]);
                basis_functions[r] = saved + right[r + 1] * temp;
                saved = left[j - r] * temp;
            }

            basis_functions[j] = saved;
        }

        basis_functions
    }

    /// Compute the first derivatives of the non-vanishing basis functions
    /// from the basis functions one degree lower.
    pub fn first_derivative_basis_functions(
        &self,
        knot_span_index: usize,
        u: T,
        degree: usize,
    ) -> Vec<T> {
        if degree == 0 {
            return vec![T::zero()];
        }

        let lower = self.basis_functions(knot_span_index, u, degree - 1);
        let p = T::from_usize(degree).unwrap();
        let first = knot_span_index - degree;

        let term = |k: usize, value: T| {
            let denom = self[k + degree] - self[k];
            if denom.abs() < T::default_epsilon() {
                T::zero()
            } else {
                value / denom
            }
        };

        (0..=degree)
            .map(|j| {
                let left = if j > 0 {
                    term(first + j, lower[j - 1])
                } else {
                    T::zero()
                };
                let right = if j < degree {
                    term(first + j + 1, lower[j])
                } else {
                    T::zero()
                };
                p * (left - right)
            })
            .collect()
    }
}

impl<T> Index<usize> for KnotVector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T: FloatingPoint> Invertible for KnotVector<T> {
    /// Reverses the knot vector, keeping its first knot in place
    /// # Example
    /// ```
    /// use rebar_curves::prelude::*;
    /// let mut knot = KnotVector::new(vec![0., 0., 0., 1., 2., 2.5, 3.5, 4.0, 4.0]);
    /// knot.invert();
    /// assert_eq!(knot.as_slice(), &[0.0, 0.0, 0.5, 1.5, 2.0, 3.0, 4.0, 4.0, 4.0]);
    /// ```
    fn invert(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }

        let mut next = vec![self.0[0]];
        for i in 1..len {
            next.push(next[i - 1] + (self[len - i] - self[len - i - 1]));
        }

        self.0 = next;
    }
}
