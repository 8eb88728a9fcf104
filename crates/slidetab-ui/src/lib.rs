//! Draggable pull tab for Slidetab
//!
//! [`DraggableTab`] wires a pointer stream through the drag recogniser into
//! the drag state machine and eases the resulting offsets with springs. Hosts
//! feed pointer events, call [`DraggableTab::on_frame`] once per display
//! refresh and draw the panel and handle at the returned positions.

mod config;
mod draggable_tab;

pub use config::{ConfigError, DraggableTabConfig};
pub use draggable_tab::{DraggableTab, TabFrame};

pub use slidetab_animation::{AnimationSpec, AnimationType, Easing, SpringSpec};
pub use slidetab_core::{DragState, GeometryError, TabGeometry};
pub use slidetab_foundation::{PointerEvent, PointerEventKind};
pub use slidetab_ui_graphics::{Dp, Point, Size};
