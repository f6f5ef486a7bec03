pub mod curve_plane;
pub mod cut_by_plane;

pub use curve_plane::*;
pub use cut_by_plane::*;

#[cfg(test)]
mod tests;
