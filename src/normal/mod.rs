pub mod normal_curve_options;
pub mod normal_curves;

pub use normal_curve_options::*;
pub use normal_curves::*;

#[cfg(test)]
mod tests;
