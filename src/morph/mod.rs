pub mod alignment;
pub mod curve_morph;
pub mod morph_options;

pub use alignment::*;
pub use curve_morph::*;
pub use morph_options::*;

#[cfg(test)]
mod tests;

use crate::{curve::NurbsCurve, misc::FloatingPoint};

/// A trait for generating a family of curves that gradually morph from one curve into another.
///
/// The morph works by:
/// 1. Sampling both curves at the same normalized parameters
/// 2. Spanning a straight construction line between each pair of samples
/// 3. Dividing every construction line evenly and fitting a curve through each division
///
/// # Type Parameters
///
/// * `T` - The floating point type (f32 or f64)
/// * `Rhs` - The curve to morph into
pub trait MorphTo<T: FloatingPoint, Rhs: ?Sized = Self> {
    /// Generates `options.count()` curves strictly between `self` and `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - The curve to morph into, reversed automatically when it runs against `self`
    /// * `options` - The number of curves, the sampling precision and the offset
    ///
    /// # Returns
    ///
    /// The morphed curves ordered from `self` towards `other`
    fn try_morph_to(
        &self,
        other: &Rhs,
        options: &MorphOptions<T>,
    ) -> anyhow::Result<Vec<NurbsCurve<T>>>;
}
