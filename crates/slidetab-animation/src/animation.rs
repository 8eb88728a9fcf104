//! Time-based animations with easing curves and spring physics.
//!
//! Note: `animateTo` and `snapTo` keep the camelCase names of their Jetpack
//! Compose counterparts.

#![allow(non_snake_case)]

use slidetab_ui_graphics::Dp;

const NANOS_PER_SECOND: f32 = 1_000_000_000.0;

/// Largest integration step used by the spring solver, in seconds.
const MAX_SPRING_STEP_SECONDS: f32 = 0.004;

/// Longest stretch of time a single spring step integrates. Frame gaps beyond
/// this (a stalled host, a clock switch) resume the motion instead of jumping.
const MAX_SPRING_FRAME_SECONDS: f32 = 0.1;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Dp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Dp(self.0.lerp(&target.0, fraction))
    }
}

/// Trait for values that can participate in spring animations.
pub trait SpringScalar: Lerp + Clone + PartialEq {
    /// Convert the value to `f32` for physics calculations.
    fn to_f32(&self) -> f32;

    /// Rebuild a value from the physics representation.
    fn from_f32(value: f32) -> Self;

    /// Smallest difference that is still visible for this type.
    fn visibility_threshold() -> f32 {
        0.01
    }

    /// Determine whether the current value is close enough to the target to
    /// consider the spring finished.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }

    fn from_f32(value: f32) -> Self {
        value
    }
}

impl SpringScalar for f64 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }

    fn from_f32(value: f32) -> Self {
        value as f64
    }
}

impl SpringScalar for Dp {
    fn to_f32(&self) -> f32 {
        self.0
    }

    fn from_f32(value: f32) -> Self {
        Dp(value)
    }

    fn visibility_threshold() -> f32 {
        Dp::VISIBILITY_THRESHOLD.0
    }
}

/// Easing functions for animations matching Jetpack Compose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
    LinearOutSlowInEasing,
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson on x(t) = fraction, bisection when the slope flattens out.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            solved = true;
            break;
        }
        let dx = slope(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..16 {
            let delta = sample(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

/// Tween specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration.
///
/// `damping_ratio` of 1.0 is critically damped, lower values bounce and higher
/// values creep towards the target. `stiffness` controls how fast the spring
/// pulls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Distance and speed under which the spring is considered settled. `None`
    /// uses the animated type's own threshold.
    pub visibility_threshold: Option<f32>,
}

impl SpringSpec {
    pub const DAMPING_RATIO_HIGH_BOUNCY: f32 = 0.2;
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

    pub const STIFFNESS_HIGH: f32 = 10_000.0;
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
    pub const STIFFNESS_LOW: f32 = 200.0;
    pub const STIFFNESS_VERY_LOW: f32 = 50.0;

    /// Equivalent of Compose's `spring(dampingRatio, stiffness)`.
    pub fn spring(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            visibility_threshold: None,
        }
    }

    /// Create a spring with default material design values.
    pub fn default_spring() -> Self {
        Self::spring(Self::DAMPING_RATIO_NO_BOUNCY, Self::STIFFNESS_MEDIUM)
    }

    pub fn bouncy() -> Self {
        Self::spring(Self::DAMPING_RATIO_MEDIUM_BOUNCY, Self::STIFFNESS_MEDIUM)
    }

    pub fn stiff() -> Self {
        Self::spring(Self::DAMPING_RATIO_NO_BOUNCY, 3_000.0)
    }

    pub fn with_visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = Some(threshold);
        self
    }

    /// Advance a damped harmonic oscillator by `dt` seconds.
    ///
    /// Pure function of its inputs: returns the new `(value, velocity)` for a
    /// spring pulling `value` towards `target`. Integration uses semi-implicit
    /// Euler in bounded substeps so long frames stay stable. `dt` is capped at
    /// 100 ms.
    pub fn step(&self, value: f32, velocity: f32, target: f32, dt: f32) -> (f32, f32) {
        let dt = dt.min(MAX_SPRING_FRAME_SECONDS);
        if dt <= 0.0 {
            return (value, velocity);
        }

        let stiffness = self.stiffness;
        let damping = 2.0 * self.damping_ratio * stiffness.sqrt();
        let substeps = (dt / MAX_SPRING_STEP_SECONDS).ceil() as u32;
        let step = dt / substeps as f32;

        let mut value = value;
        let mut velocity = velocity;
        for _ in 0..substeps {
            let displacement = value - target;
            let force = -stiffness * displacement - damping * velocity;
            velocity += force * step;
            value += velocity * step;
        }
        (value, velocity)
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Spring(SpringSpec::default())
    }
}

/// Animated value chasing a target, advanced by explicit frame timestamps.
#[derive(Debug, Clone)]
pub struct Animatable<T: SpringScalar> {
    current: T,
    /// Units per second; carried across retargets so springs stay continuous.
    velocity: f32,
    start: T,
    target: T,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    running: bool,
}

impl<T: SpringScalar> Animatable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            running: false,
        }
    }

    /// Animate to the target value using the specified animation.
    pub fn animateTo(&mut self, target: T, animation: AnimationType) {
        self.start = self.current.clone();
        self.target = target;
        self.animation_type = animation;
        self.start_time_nanos = None;
        if matches!(animation, AnimationType::Tween(_)) {
            self.velocity = 0.0;
        }
        self.running = self.current != self.target || self.velocity != 0.0;
    }

    /// Retarget only when the target or the animation changed.
    ///
    /// Returns `true` when a new animation was started.
    pub fn update_target(&mut self, target: T, animation: AnimationType) -> bool {
        let is_new_target = !T::is_near_target(&self.target, &target, f32::EPSILON);
        let is_new_animation = self.animation_type != animation;
        if is_new_target || is_new_animation {
            self.animateTo(target, animation);
            true
        } else {
            false
        }
    }

    /// Snap immediately to the target value without animating.
    pub fn snapTo(&mut self, target: T) {
        self.current = target.clone();
        self.start = target.clone();
        self.target = target;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = false;
    }

    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance to `frame_time_nanos` and return the eased value.
    ///
    /// The first frame of an animation only records the time base. Retargeting
    /// a running spring keeps its time base so frequent retargets still move.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> T {
        if !self.running {
            return self.current.clone();
        }

        match self.animation_type {
            AnimationType::Tween(spec) => self.advance_tween(spec, frame_time_nanos),
            AnimationType::Spring(spec) => self.advance_spring(spec, frame_time_nanos),
        }

        self.current.clone()
    }

    fn advance_tween(&mut self, spec: AnimationSpec, frame_time_nanos: u64) {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = spec.delay_millis * 1_000_000;
        if elapsed_nanos < delay_nanos {
            return;
        }

        let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        let progress = spec.easing.transform(linear_progress);
        self.current = self.start.lerp(&self.target, progress);

        if linear_progress >= 1.0 {
            self.settle();
        }
    }

    fn advance_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) {
        let Some(last_frame) = self.last_frame_nanos.replace(frame_time_nanos) else {
            return;
        };
        let dt = frame_time_nanos.saturating_sub(last_frame) as f32 / NANOS_PER_SECOND;
        if dt <= 0.0 {
            return;
        }

        let (value, velocity) = spec.step(
            self.current.to_f32(),
            self.velocity,
            self.target.to_f32(),
            dt,
        );
        self.current = T::from_f32(value);
        self.velocity = velocity;

        let threshold = spec
            .visibility_threshold
            .unwrap_or_else(T::visibility_threshold);
        let at_rest = self.velocity.abs() < threshold;
        let near_target = T::is_near_target(&self.current, &self.target, threshold);
        if at_rest && near_target {
            self.settle();
        }
    }

    fn settle(&mut self) {
        log::trace!("animation settled at {}", self.target.to_f32());
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = false;
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
