use slidetab_animation::{AnimationType, SpringSpec};
use slidetab_core::{GeometryError, TabGeometry};
use slidetab_foundation::DRAG_THRESHOLD;
use std::fmt;

/// Construction-time settings for [`crate::DraggableTab`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DraggableTabConfig {
    pub geometry: TabGeometry,
    /// Eases the panel position. Bouncy by default so overscroll snaps back
    /// with a wobble.
    pub horizontal_animation: AnimationType,
    pub vertical_animation: AnimationType,
    /// Physical pixels per `Dp`, used to convert pointer deltas.
    pub density: f32,
    /// Touch slop in physical pixels.
    pub touch_slop: f32,
}

impl Default for DraggableTabConfig {
    fn default() -> Self {
        Self {
            geometry: TabGeometry::default(),
            horizontal_animation: AnimationType::Spring(SpringSpec::spring(
                SpringSpec::DAMPING_RATIO_MEDIUM_BOUNCY,
                350.0,
            )),
            vertical_animation: AnimationType::Spring(SpringSpec::default()),
            density: 1.0,
            touch_slop: DRAG_THRESHOLD,
        }
    }
}

impl DraggableTabConfig {
    pub fn with_geometry(mut self, geometry: TabGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_horizontal_animation(mut self, animation: AnimationType) -> Self {
        self.horizontal_animation = animation;
        self
    }

    pub fn with_vertical_animation(mut self, animation: AnimationType) -> Self {
        self.vertical_animation = animation;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()?;
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        if !(self.touch_slop.is_finite() && self.touch_slop >= 0.0) {
            return Err(ConfigError::InvalidTouchSlop(self.touch_slop));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    Geometry(GeometryError),
    InvalidDensity(f32),
    InvalidTouchSlop(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Geometry(err) => write!(f, "invalid tab geometry: {err}"),
            ConfigError::InvalidDensity(density) => {
                write!(f, "density must be a positive finite number, got {density}")
            }
            ConfigError::InvalidTouchSlop(slop) => {
                write!(f, "touch slop must be a non-negative finite number, got {slop}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Geometry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GeometryError> for ConfigError {
    fn from(err: GeometryError) -> Self {
        ConfigError::Geometry(err)
    }
}
