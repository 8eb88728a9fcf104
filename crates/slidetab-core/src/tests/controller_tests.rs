use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn controller() -> DragController {
    DragController::new(TabGeometry::default()).expect("default geometry is valid")
}

/// Start a gesture and drag the panel exactly to the open position.
fn dragging_at_open() -> DragController {
    let mut controller = controller();
    controller.on_drag_start();
    controller.on_drag_move(Dp(78.0), Dp(0.0));
    assert_eq!(controller.state().horizontal_offset, Dp(13.0));
    controller
}

#[test]
fn initial_state_is_closed_and_idle() {
    let state = controller().state();
    assert_eq!(state.horizontal_offset, Dp(-65.0));
    assert_eq!(state.vertical_offset, Dp(16.0));
    assert!(!state.dragging);
    assert!(state.horizontal_axis_locked);
}

#[test]
fn start_and_end_toggle_dragging() {
    let mut controller = controller();
    controller.on_drag_start();
    assert!(controller.is_dragging());
    controller.on_drag_end();
    assert!(!controller.is_dragging());
}

#[test]
fn overscroll_past_open_is_damped_then_snapped_back() {
    let mut controller = controller();
    controller.on_drag_start();

    controller.on_drag_move(Dp(90.0), Dp(0.0));
    // Candidate 25 overshoots open (13) by 12, a third of which is kept.
    assert_eq!(controller.state().horizontal_offset, Dp(17.0));

    controller.on_drag_end();
    assert_eq!(controller.state().horizontal_offset, Dp(13.0));
}

#[test]
fn overscroll_from_open_moves_at_one_third_rate() {
    let mut controller = dragging_at_open();
    controller.on_drag_move(Dp(9.0), Dp(0.0));
    assert_eq!(controller.state().horizontal_offset, Dp(16.0));
}

#[test]
fn overscroll_has_no_upper_bound() {
    let mut controller = dragging_at_open();
    controller.on_drag_move(Dp(3_000.0), Dp(0.0));
    assert_eq!(controller.state().horizontal_offset, Dp(1_013.0));

    controller.on_drag_end();
    assert_eq!(controller.state().horizontal_offset, Dp(13.0));
}

#[test]
fn drag_end_corrects_overscroll_of_thirty() {
    let mut controller = dragging_at_open();
    controller.on_drag_move(Dp(90.0), Dp(0.0));
    assert_eq!(controller.state().horizontal_offset, Dp(43.0));
    assert!(controller.state().dragging);

    controller.on_drag_end();
    assert_eq!(controller.state().horizontal_offset, Dp(13.0));
}

#[test]
fn closed_side_is_a_hard_stop() {
    let mut controller = controller();
    controller.on_drag_start();
    controller.on_drag_move(Dp(-40.0), Dp(0.0));
    assert_eq!(controller.state().horizontal_offset, Dp(-65.0));

    controller.on_drag_move(Dp(30.0), Dp(0.0));
    controller.on_drag_move(Dp(-500.0), Dp(0.0));
    assert_eq!(controller.state().horizontal_offset, Dp(-65.0));
}

#[test]
fn position_within_range_is_kept_after_release() {
    let mut controller = controller();
    controller.on_drag_start();
    controller.on_drag_move(Dp(40.0), Dp(10.0));
    controller.on_drag_end();

    let state = controller.state();
    assert_eq!(state.horizontal_offset, Dp(-25.0));
    assert_eq!(state.vertical_offset, Dp(26.0));
}

#[test]
fn vertical_offset_is_clamped_on_both_sides() {
    let mut controller = controller();
    controller.on_drag_start();
    controller.on_drag_move(Dp(0.0), Dp(500.0));
    assert_eq!(controller.state().vertical_offset, Dp(249.0));

    controller.on_drag_move(Dp(0.0), Dp(-1_000.0));
    assert_eq!(controller.state().vertical_offset, Dp(16.0));
}

#[test]
fn vertical_offset_stays_in_range_for_mixed_moves() {
    let mut controller = controller();
    let (min, max) = (Dp(16.0), Dp(249.0));
    let deltas = [
        (3.0, 1.0),
        (10.0, -40.0),
        (-2.0, 120.0),
        (5.0, 200.0),
        (0.0, -7.5),
        (1.0, -400.0),
        (-3.0, 33.0),
    ];

    controller.on_drag_start();
    for (dx, dy) in deltas {
        controller.on_drag_move(Dp(dx), Dp(dy));
        let vertical = controller.state().vertical_offset;
        assert!(vertical >= min && vertical <= max, "vertical {vertical:?} out of range");
    }
}

#[test]
fn vertical_dominant_move_locks_out_horizontal_for_rest_of_gesture() {
    let mut controller = controller();
    controller.on_drag_start();
    controller.on_drag_move(Dp(10.0), Dp(2.0));
    assert_eq!(controller.state().horizontal_offset, Dp(-55.0));

    // The flipping move itself applies no horizontal movement.
    controller.on_drag_move(Dp(5.0), Dp(6.0));
    let state = controller.state();
    assert!(!state.horizontal_axis_locked);
    assert_eq!(state.horizontal_offset, Dp(-55.0));
    assert_eq!(state.vertical_offset, Dp(24.0));

    controller.on_drag_move(Dp(50.0), Dp(0.0));
    controller.on_drag_move(Dp(-50.0), Dp(1.0));
    let state = controller.state();
    assert_eq!(state.horizontal_offset, Dp(-55.0));
    assert!(!state.horizontal_axis_locked);
    assert_eq!(state.vertical_offset, Dp(25.0));
}

#[test]
fn axis_lock_is_checked_on_every_move_until_it_flips() {
    let mut controller = controller();
    controller.on_drag_start();
    for _ in 0..5 {
        controller.on_drag_move(Dp(4.0), Dp(1.0));
    }
    assert!(controller.state().horizontal_axis_locked);

    controller.on_drag_move(Dp(1.0), Dp(4.0));
    assert!(!controller.state().horizontal_axis_locked);
}

#[test]
fn equal_deltas_do_not_flip_the_lock() {
    let mut controller = controller();
    controller.on_drag_start();
    controller.on_drag_move(Dp(-5.0), Dp(5.0));
    assert!(controller.state().horizontal_axis_locked);
}

#[test]
fn axis_lock_resets_between_gestures() {
    let mut controller = controller();

    controller.on_drag_start();
    assert!(controller.state().horizontal_axis_locked);
    controller.on_drag_move(Dp(0.0), Dp(20.0));
    assert!(!controller.state().horizontal_axis_locked);
    controller.on_drag_end();
    assert!(controller.state().horizontal_axis_locked);

    controller.on_drag_start();
    assert!(controller.state().horizontal_axis_locked);
    controller.on_drag_move(Dp(20.0), Dp(0.0));
    assert_eq!(controller.state().horizontal_offset, Dp(-45.0));
    controller.on_drag_end();
}

#[test]
fn calls_outside_a_gesture_are_ignored() {
    let mut controller = controller();
    let initial = controller.state();

    controller.on_drag_move(Dp(50.0), Dp(50.0));
    assert_eq!(controller.state(), initial);

    controller.on_drag_end();
    assert_eq!(controller.state(), initial);

    controller.on_drag_start();
    controller.on_drag_move(Dp(0.0), Dp(30.0));
    let locked_out = controller.state();
    controller.on_drag_start();
    assert_eq!(controller.state(), locked_out, "nested start must not reset the lock");
}

#[test]
fn subscribers_see_each_change_once() {
    let mut controller = controller();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let id = {
        let seen = Rc::clone(&seen);
        controller.subscribe(move |state| seen.borrow_mut().push(*state))
    };

    controller.on_drag_start();
    controller.on_drag_move(Dp(90.0), Dp(0.0));
    controller.on_drag_move(Dp(-100.0), Dp(0.0));
    controller.on_drag_move(Dp(-100.0), Dp(0.0)); // already closed, no change
    controller.on_drag_end();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 4);
    assert!(seen[0].dragging);
    assert_eq!(seen[1].horizontal_offset, Dp(17.0));
    assert_eq!(seen[2].horizontal_offset, Dp(-65.0));
    assert!(!seen[3].dragging);
    drop(seen);

    assert!(controller.unsubscribe(id));
    assert!(!controller.unsubscribe(id));
}

#[test]
fn subscriber_observes_snap_back_in_same_notification() {
    let mut controller = dragging_at_open();
    controller.on_drag_move(Dp(30.0), Dp(0.0));

    let last = Rc::new(RefCell::new(None));
    {
        let last = Rc::clone(&last);
        controller.subscribe(move |state| *last.borrow_mut() = Some(*state));
    }
    controller.on_drag_end();

    let last = last.borrow().expect("drag end notifies");
    assert!(!last.dragging);
    assert_eq!(last.horizontal_offset, Dp(13.0));
}

#[test]
fn invalid_geometry_fails_construction() {
    let geometry = TabGeometry::default().with_track_height(Dp(40.0));
    assert!(matches!(
        DragController::new(geometry),
        Err(GeometryError::InvertedVerticalRange { .. })
    ));
}
