pub mod curve_pair;
pub mod trimmed_surface;

pub use curve_pair::*;
pub use trimmed_surface::*;
