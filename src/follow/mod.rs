pub mod follow_options;
pub mod follow_surface;

pub use follow_options::*;
pub use follow_surface::*;
