use crate::config::{ConfigError, DraggableTabConfig};
use slidetab_animation::Animatable;
use slidetab_core::{DragController, DragState};
use slidetab_foundation::{DragGestureDetector, DragGestureEvent, PointerEvent};
use slidetab_ui_graphics::{Dp, Point, Size};
use std::cell::Cell;
use std::rc::Rc;

/// Positions for one rendered frame, in `Dp`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabFrame {
    /// Top-left of the sliding panel.
    pub panel_offset: Point,
    pub panel_size: Size,
    /// Top-left of the vertical handle riding on the panel edge.
    pub handle_offset: Point,
    pub handle_size: Size,
}

/// Pull tab widget state: gesture recognition, drag state and easing.
pub struct DraggableTab {
    config: DraggableTabConfig,
    controller: DragController,
    detector: DragGestureDetector,
    /// Latest state published by the controller, not yet pushed to the animators.
    pending_targets: Rc<Cell<Option<DragState>>>,
    horizontal: Animatable<Dp>,
    vertical: Animatable<Dp>,
}

impl DraggableTab {
    pub fn new(config: DraggableTabConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut controller = DragController::new(config.geometry)?;
        let pending_targets = Rc::new(Cell::new(None));
        {
            let pending_targets = Rc::clone(&pending_targets);
            controller.subscribe(move |state| pending_targets.set(Some(*state)));
        }

        let initial = controller.state();
        Ok(Self {
            config,
            detector: DragGestureDetector::with_touch_slop(config.touch_slop),
            horizontal: Animatable::new(initial.horizontal_offset),
            vertical: Animatable::new(initial.vertical_offset),
            controller,
            pending_targets,
        })
    }

    pub fn config(&self) -> &DraggableTabConfig {
        &self.config
    }

    pub fn state(&self) -> DragState {
        self.controller.state()
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    /// Route a raw pointer event through the drag recogniser.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        for gesture in self.detector.on_pointer_event(event) {
            match gesture {
                DragGestureEvent::Start(_) => self.controller.on_drag_start(),
                DragGestureEvent::Drag(delta) => {
                    let density = self.config.density;
                    self.controller.on_drag_move(
                        Dp::from_px(delta.x, density),
                        Dp::from_px(delta.y, density),
                    );
                }
                // A cancelled gesture releases the tab like a normal lift.
                DragGestureEvent::End | DragGestureEvent::Cancel => self.controller.on_drag_end(),
            }
        }
        self.sync_targets();
    }

    /// Begin a gesture for hosts that recognise drags themselves.
    pub fn drag_start(&mut self) {
        self.controller.on_drag_start();
        self.sync_targets();
    }

    pub fn drag_by(&mut self, delta_x: Dp, delta_y: Dp) {
        self.controller.on_drag_move(delta_x, delta_y);
        self.sync_targets();
    }

    pub fn drag_end(&mut self) {
        self.controller.on_drag_end();
        self.sync_targets();
    }

    /// Advance both animations to `frame_time_nanos`.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> TabFrame {
        let x = self.horizontal.on_frame(frame_time_nanos);
        let y = self.vertical.on_frame(frame_time_nanos);
        self.frame_at(x, y)
    }

    /// Positions at the current eased values without advancing time.
    pub fn current_frame(&self) -> TabFrame {
        self.frame_at(self.horizontal.value(), self.vertical.value())
    }

    /// `true` while either offset is still easing towards its target.
    pub fn is_animating(&self) -> bool {
        self.horizontal.is_running() || self.vertical.is_running()
    }

    fn frame_at(&self, x: Dp, y: Dp) -> TabFrame {
        let geometry = self.controller.geometry();
        TabFrame {
            panel_offset: Point::new(x.0, 0.0),
            panel_size: geometry.panel_size(),
            handle_offset: Point::new(x.0, y.0),
            handle_size: geometry.vertical_handle_size(),
        }
    }

    fn sync_targets(&mut self) {
        let Some(state) = self.pending_targets.take() else {
            return;
        };
        let horizontal = self
            .horizontal
            .update_target(state.horizontal_offset, self.config.horizontal_animation);
        let vertical = self
            .vertical
            .update_target(state.vertical_offset, self.config.vertical_animation);
        if horizontal || vertical {
            log::trace!(
                "retargeted tab to ({}, {})",
                state.horizontal_offset.0,
                state.vertical_offset.0
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/draggable_tab_tests.rs"]
mod tests;
