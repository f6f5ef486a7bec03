pub mod curve;
pub use curve::*;

/// Interpolation trait
pub trait Interpolation {
    type Input: ?Sized;
    type Output;
    fn interpolate(input: &Self::Input, degree: usize) -> Self::Output;
}
