//! Drag state machine for the Slidetab pull tab.
//!
//! [`DragController`] interprets a stream of `start / move(dx, dy) / end`
//! calls into two offsets: a horizontal one that reveals the panel (with a
//! rubber-band past the open position) and a vertical one that slides the
//! handle along the panel edge. A gesture commits to vertical-only movement
//! as soon as one move is more vertical than horizontal.

mod controller;
mod geometry;
mod state;

pub use controller::{DragController, SubscriptionId};
pub use geometry::{GeometryError, TabGeometry};
pub use state::DragState;

pub mod prelude {
    pub use crate::controller::DragController;
    pub use crate::geometry::TabGeometry;
    pub use crate::state::DragState;
}
