//! Drives a pull tab with scripted pointer gestures and logs the eased
//! positions a renderer would draw. Run with `RUST_LOG=debug` to also see the
//! drag state machine's transitions.

use slidetab_ui::{DraggableTab, DraggableTabConfig, PointerEvent, TabFrame};
use std::error::Error;

const FRAME_NANOS: u64 = 16_666_667;

/// Pointer positions sampled once per frame.
struct Script {
    name: &'static str,
    events: Vec<PointerEvent>,
}

fn horizontal_overscroll() -> Script {
    let mut events = vec![PointerEvent::down(4.0, 40.0)];
    events.extend((1..=12).map(|step| PointerEvent::moved(4.0 + step as f32 * 12.0, 40.0)));
    events.push(PointerEvent::up(148.0, 40.0));
    Script {
        name: "open with overscroll",
        events,
    }
}

fn vertical_slide() -> Script {
    let mut events = vec![PointerEvent::down(20.0, 40.0)];
    events.extend((1..=10).map(|step| PointerEvent::moved(20.0 + step as f32, 40.0 + step as f32 * 30.0)));
    events.push(PointerEvent::up(30.0, 340.0));
    Script {
        name: "slide handle down",
        events,
    }
}

fn close_panel() -> Script {
    let mut events = vec![PointerEvent::down(90.0, 200.0)];
    events.extend((1..=8).map(|step| PointerEvent::moved(90.0 - step as f32 * 15.0, 200.0)));
    events.push(PointerEvent::cancel());
    Script {
        name: "close, cancelled mid-gesture",
        events,
    }
}

fn log_frame(time_nanos: u64, frame: &TabFrame) {
    log::info!(
        "t={:>4}ms panel.x={:>7.2} handle=({:>7.2}, {:>7.2})",
        time_nanos / 1_000_000,
        frame.panel_offset.x,
        frame.handle_offset.x,
        frame.handle_offset.y
    );
}

fn run_script(tab: &mut DraggableTab, script: Script, time_nanos: &mut u64) {
    log::info!("--- {} ---", script.name);
    for event in &script.events {
        tab.on_pointer_event(event);
        *time_nanos += FRAME_NANOS;
        let frame = tab.on_frame(*time_nanos);
        log_frame(*time_nanos, &frame);
    }

    let mut settle_frames = 0;
    while tab.is_animating() {
        *time_nanos += FRAME_NANOS;
        let frame = tab.on_frame(*time_nanos);
        settle_frames += 1;
        if settle_frames % 4 == 0 || !tab.is_animating() {
            log_frame(*time_nanos, &frame);
        }
    }

    let state = tab.state();
    log::info!(
        "settled after {settle_frames} frames at ({}, {})",
        state.horizontal_offset.0,
        state.vertical_offset.0
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }

    let mut tab = DraggableTab::new(DraggableTabConfig::default())?;
    let mut time_nanos = 0u64;
    tab.on_frame(time_nanos);

    for script in [horizontal_overscroll(), vertical_slide(), close_panel()] {
        run_script(&mut tab, script, &mut time_nanos);
    }

    Ok(())
}
