//! Unit types: Dp and conversion from pixels

use std::ops::{Add, Div, Neg, Sub};

/// Density-independent pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    /// Smallest change in `Dp` that is considered visible when animating.
    pub const VISIBILITY_THRESHOLD: Dp = Dp(0.1);

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Clamp into `[min, max]`. Callers must guarantee `min <= max`.
    pub fn coerce_in(self, min: Dp, max: Dp) -> Self {
        debug_assert!(min <= max, "coerce_in called with min {min:?} > max {max:?}");
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Dp {
        Dp(-self.0)
    }
}

impl Div<f32> for Dp {
    type Output = Dp;

    fn div(self, rhs: f32) -> Dp {
        Dp(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_matches_raw_floats() {
        let open = Dp(78.0) - Dp(65.0);
        assert_eq!(open, Dp(13.0));
        assert_eq!(open + (Dp(25.0) - open) / 3.0, Dp(17.0));
        assert_eq!(-Dp(65.0), Dp(-65.0));
    }

    #[test]
    fn coerce_in_clamps_both_sides() {
        assert_eq!(Dp(516.0).coerce_in(Dp(16.0), Dp(249.0)), Dp(249.0));
        assert_eq!(Dp(-4.0).coerce_in(Dp(16.0), Dp(249.0)), Dp(16.0));
        assert_eq!(Dp(100.0).coerce_in(Dp(16.0), Dp(249.0)), Dp(100.0));
    }

    #[test]
    fn from_px_divides_by_density() {
        assert_eq!(Dp::from_px(40.0, 2.0), Dp(20.0));
        assert_eq!(Dp::from_px(-12.0, 1.5), Dp(-8.0));
    }
}
