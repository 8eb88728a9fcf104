//! Drag gesture recogniser.
//!
//! Turns a raw pointer stream into `Start`, `Drag(delta)` and `End`/`Cancel`
//! callbacks once the pointer has moved past the touch slop. Only one pointer
//! is tracked at a time; other pointers are ignored until it is released.

use super::super::types::{PointerEvent, PointerEventKind, PointerId};
use crate::gesture_constants::DRAG_THRESHOLD;
use slidetab_ui_graphics::Point;
use smallvec::SmallVec;

/// Output of [`DragGestureDetector::on_pointer_event`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragGestureEvent {
    /// Slop exceeded. Carries the position of the initial press.
    Start(Point),
    /// Incremental displacement since the previous drag event.
    Drag(Point),
    End,
    Cancel,
}

pub type DragGestureEvents = SmallVec<[DragGestureEvent; 2]>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Pressed { pointer: PointerId, down: Point },
    Dragging { pointer: PointerId, last: Point },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGestureDetector {
    touch_slop: f32,
    phase: Phase,
}

impl Default for DragGestureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGestureDetector {
    pub fn new() -> Self {
        Self::with_touch_slop(DRAG_THRESHOLD)
    }

    pub fn with_touch_slop(touch_slop: f32) -> Self {
        Self {
            touch_slop: touch_slop.max(0.0),
            phase: Phase::Idle,
        }
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Forget any tracked pointer without emitting events.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Feed one pointer event. Emitted drag events consume `event`.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> DragGestureEvents {
        let mut out = DragGestureEvents::new();
        if event.is_consumed() {
            return out;
        }

        match (self.phase, event.kind) {
            (Phase::Idle, PointerEventKind::Down) => {
                self.phase = Phase::Pressed {
                    pointer: event.id,
                    down: event.position,
                };
            }
            (Phase::Pressed { pointer, down }, PointerEventKind::Move) if pointer == event.id => {
                let total = event.position - down;
                let distance = total.distance();
                if distance > self.touch_slop {
                    // Report only the movement past the slop boundary.
                    let scale = self.touch_slop / distance;
                    let over_slop = Point::new(total.x - total.x * scale, total.y - total.y * scale);
                    log::debug!("drag started after {distance:.1}px from {down:?}");
                    self.phase = Phase::Dragging {
                        pointer,
                        last: event.position,
                    };
                    out.push(DragGestureEvent::Start(down));
                    out.push(DragGestureEvent::Drag(over_slop));
                }
            }
            (Phase::Pressed { pointer, .. }, PointerEventKind::Up | PointerEventKind::Cancel)
                if pointer == event.id =>
            {
                self.phase = Phase::Idle;
            }
            (Phase::Dragging { pointer, last }, PointerEventKind::Move) if pointer == event.id => {
                let delta = event.position - last;
                self.phase = Phase::Dragging {
                    pointer,
                    last: event.position,
                };
                if delta != Point::ZERO {
                    out.push(DragGestureEvent::Drag(delta));
                }
            }
            (Phase::Dragging { pointer, .. }, PointerEventKind::Up) if pointer == event.id => {
                self.phase = Phase::Idle;
                out.push(DragGestureEvent::End);
            }
            (Phase::Dragging { pointer, .. }, PointerEventKind::Cancel) if pointer == event.id => {
                self.phase = Phase::Idle;
                out.push(DragGestureEvent::Cancel);
            }
            (phase, kind) => {
                log::trace!("drag detector ignoring {kind:?} from pointer {} in {phase:?}", event.id);
            }
        }

        if !out.is_empty() {
            event.consume();
        }
        out
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
