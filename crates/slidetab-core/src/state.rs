use crate::geometry::TabGeometry;
use slidetab_ui_graphics::Dp;

/// Offsets and flags driven by the drag handlers.
///
/// Handed out by value; only [`crate::DragController`] mutates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub horizontal_offset: Dp,
    pub vertical_offset: Dp,
    pub dragging: bool,
    /// `true` while the current gesture may still move horizontally. Cleared
    /// once a move is more vertical than horizontal, restored on drag end.
    pub horizontal_axis_locked: bool,
}

impl DragState {
    /// Resting state at mount: panel closed, handle at the top of its range.
    pub fn initial(geometry: &TabGeometry) -> Self {
        Self {
            horizontal_offset: geometry.closed_offset(),
            vertical_offset: geometry.vertical_min(),
            dragging: false,
            horizontal_axis_locked: true,
        }
    }

    pub fn is_overscrolled(&self, geometry: &TabGeometry) -> bool {
        self.horizontal_offset > geometry.open_offset()
    }
}
