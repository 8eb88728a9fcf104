//! Drag gesture interpretation for the pull tab.
//!
//! The controller is a two-state machine (`idle`, `dragging`). `on_drag_start`
//! and `on_drag_end` are the only transitions, `on_drag_move` loops on
//! `dragging`. Calls arriving in the wrong state are ignored.

use crate::geometry::{GeometryError, TabGeometry};
use crate::state::DragState;
use slidetab_ui_graphics::Dp;
use smallvec::SmallVec;

/// Divisor applied to movement past the open position.
const OVERSCROLL_RESISTANCE: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&DragState)>;

pub struct DragController {
    geometry: TabGeometry,
    state: DragState,
    subscribers: SmallVec<[(SubscriptionId, Subscriber); 2]>,
    next_subscription: u64,
}

impl DragController {
    pub fn new(geometry: TabGeometry) -> Result<Self, GeometryError> {
        geometry.validate()?;
        let state = DragState::initial(&geometry);
        log::debug!(
            "drag controller ready: horizontal [{}, {}], vertical [{}, {}]",
            geometry.closed_offset().0,
            geometry.open_offset().0,
            geometry.vertical_min().0,
            geometry.vertical_max().0
        );
        Ok(Self {
            geometry,
            state,
            subscribers: SmallVec::new(),
            next_subscription: 0,
        })
    }

    pub fn geometry(&self) -> &TabGeometry {
        &self.geometry
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// Register a callback run after every handler call that changed the state.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&DragState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn on_drag_start(&mut self) {
        if self.state.dragging {
            log::trace!("drag start ignored: gesture already active");
            return;
        }
        let before = self.state;
        self.state.dragging = true;
        self.on_dragging_changed();
        log::debug!("drag started at {:?}", self.state);
        self.commit(before);
    }

    pub fn on_drag_move(&mut self, delta_x: Dp, delta_y: Dp) {
        if !self.state.dragging {
            log::trace!("drag move ({}, {}) ignored: no active gesture", delta_x.0, delta_y.0);
            return;
        }
        let before = self.state;

        // The lock is decided before the horizontal branch, so the move that
        // flips it contributes no horizontal movement.
        if self.state.horizontal_axis_locked && delta_y.abs() > delta_x.abs() {
            self.state.horizontal_axis_locked = false;
            log::debug!("gesture committed to vertical movement");
        }

        if self.state.horizontal_axis_locked {
            self.state.horizontal_offset =
                horizontal_target(&self.geometry, self.state.horizontal_offset + delta_x);
        }

        self.state.vertical_offset = (self.state.vertical_offset + delta_y)
            .coerce_in(self.geometry.vertical_min(), self.geometry.vertical_max());

        log::trace!(
            "drag move ({}, {}) -> offsets ({}, {})",
            delta_x.0,
            delta_y.0,
            self.state.horizontal_offset.0,
            self.state.vertical_offset.0
        );
        self.commit(before);
    }

    pub fn on_drag_end(&mut self) {
        if !self.state.dragging {
            log::trace!("drag end ignored: no active gesture");
            return;
        }
        let before = self.state;
        self.state.dragging = false;
        self.state.horizontal_axis_locked = true;
        self.on_dragging_changed();
        log::debug!("drag ended at {:?}", self.state);
        self.commit(before);
    }

    /// Runs once per `dragging` edge. Releasing removes any overscroll.
    fn on_dragging_changed(&mut self) {
        if !self.state.dragging && self.state.is_overscrolled(&self.geometry) {
            log::debug!(
                "snapping overscroll {} back to {}",
                self.state.horizontal_offset.0,
                self.geometry.open_offset().0
            );
            self.state.horizontal_offset = self.geometry.open_offset();
        }
    }

    fn commit(&mut self, before: DragState) {
        if self.state == before {
            return;
        }
        let state = self.state;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&state);
        }
    }
}

/// Apply the open-side rubber band and the closed-side hard stop.
fn horizontal_target(geometry: &TabGeometry, candidate: Dp) -> Dp {
    let open = geometry.open_offset();
    let closed = geometry.closed_offset();
    if candidate > open {
        open + (candidate - open) / OVERSCROLL_RESISTANCE
    } else if candidate < closed {
        closed
    } else {
        candidate
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
