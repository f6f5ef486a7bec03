use crate::misc::FloatingPoint;

/// Options for morphing one curve into another
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphOptions<T> {
    /// Number of curves generated between the two input curves
    count: usize,
    /// Number of divisions used to sample each input curve
    precision: usize,
    /// Distance the generated curves are moved along the normal of the loft between the inputs
    offset: T,
}

impl<T: FloatingPoint> Default for MorphOptions<T> {
    fn default() -> Self {
        Self {
            count: 1,
            precision: 10,
            offset: T::zero(),
        }
    }
}

impl<T: FloatingPoint> MorphOptions<T> {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn offset(&self) -> T {
        self.offset
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_offset(mut self, offset: T) -> Self {
        self.offset = offset;
        self
    }
}
