pub mod angle;
pub mod cover;
pub mod floating_point;
pub mod invertible;
pub mod plane;
pub mod transformable;
pub mod transpose;

pub use angle::*;
pub use cover::*;
pub use floating_point::*;
pub use invertible::*;
pub use plane::*;
pub use transformable::*;
pub use transpose::*;
