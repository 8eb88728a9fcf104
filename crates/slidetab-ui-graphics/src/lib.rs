//! Pure math/data for units and geometry in Slidetab
//!
//! This crate contains the `Dp` length unit and the small set of geometry
//! primitives shared by the gesture, animation and widget crates.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size};
    pub use crate::unit::Dp;
}
