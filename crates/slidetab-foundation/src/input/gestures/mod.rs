pub mod drag;

pub use drag::{DragGestureDetector, DragGestureEvent};
