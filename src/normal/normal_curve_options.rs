use crate::misc::FloatingPoint;

/// Options for casting curves along the normal of a surface
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalCurveOptions<T> {
    /// Number of curves, placed at the interior parameters `i / (count + 1)`
    count: usize,
    /// Cover applied at both ends of every curve
    offset: T,
    /// Fixed parameter across the sweep direction
    height: T,
    /// Sweep along the horizontal axis of the surface, otherwise along the vertical one
    horizontal: bool,
    /// Length of the rays cast from the surface
    ray_length: T,
}

impl<T: FloatingPoint> Default for NormalCurveOptions<T> {
    fn default() -> Self {
        Self {
            count: 1,
            offset: T::zero(),
            height: T::from_f64(0.5).unwrap(),
            horizontal: true,
            ray_length: T::from_f64(1e8).unwrap(),
        }
    }
}

impl<T: FloatingPoint> NormalCurveOptions<T> {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn offset(&self) -> T {
        self.offset
    }

    pub fn height(&self) -> T {
        self.height
    }

    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    pub fn ray_length(&self) -> T {
        self.ray_length
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_offset(mut self, offset: T) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_height(mut self, height: T) -> Self {
        self.height = height;
        self
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_ray_length(mut self, ray_length: T) -> Self {
        self.ray_length = ray_length;
        self
    }
}
