#![allow(clippy::needless_range_loop)]

mod curve;
mod cut;
mod error;
mod follow;
mod interpolation;
mod intersects;
mod knot;
mod misc;
mod morph;
mod normal;
mod shorten;
mod surface;
mod trimmed;

pub mod prelude {
    pub use crate::curve::*;
    pub use crate::cut::*;
    pub use crate::error::*;
    pub use crate::follow::*;
    pub use crate::interpolation::*;
    pub use crate::intersects::*;
    pub use crate::knot::*;
    pub use crate::misc::*;
    pub use crate::morph::*;
    pub use crate::normal::*;
    pub use crate::shorten::*;
    pub use crate::surface::*;
    pub use crate::trimmed::*;
}
