//! Shared gesture constants for touch/pointer handling.
//!
//! Values are in logical pixels. High-density screens may want to scale them
//! by the device density before use.

/// Drag threshold (touch slop) in logical pixels.
///
/// A pointer has to travel further than this from its press position before
/// a drag gesture starts. Matches Android's `ViewConfiguration.TOUCH_SLOP`
/// baseline of ~8dp.
pub const DRAG_THRESHOLD: f32 = 8.0;
