//! Pointer input plumbing and gesture recognisers for Slidetab

pub mod gesture_constants;
pub mod input;

pub use gesture_constants::DRAG_THRESHOLD;
pub use input::gestures::{DragGestureDetector, DragGestureEvent};
pub use input::{PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use crate::input::gestures::{DragGestureDetector, DragGestureEvent};
    pub use crate::input::{PointerEvent, PointerEventKind};
}
