//! Constructor-time constants of the pull tab and the bounds derived from them.

use slidetab_ui_graphics::{Dp, Size};
use std::fmt;

/// Sizes of the track, the sliding panel and the vertical handle.
///
/// `handle_width`/`track_height` describe the panel that slides in from the
/// left edge; `vertical_handle_*` describe the grip that rides along it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabGeometry {
    pub track_width: Dp,
    pub handle_width: Dp,
    pub track_height: Dp,
    pub vertical_handle_width: Dp,
    pub vertical_handle_height: Dp,
    /// Gap kept between the vertical handle and the panel's top and bottom.
    pub vertical_inset: Dp,
}

impl Default for TabGeometry {
    fn default() -> Self {
        Self {
            track_width: Dp(78.0),
            handle_width: Dp(65.0),
            track_height: Dp(300.0),
            vertical_handle_width: Dp(40.0),
            vertical_handle_height: Dp(35.0),
            vertical_inset: Dp(16.0),
        }
    }
}

impl TabGeometry {
    pub fn with_track_width(mut self, track_width: Dp) -> Self {
        self.track_width = track_width;
        self
    }

    pub fn with_handle_width(mut self, handle_width: Dp) -> Self {
        self.handle_width = handle_width;
        self
    }

    pub fn with_track_height(mut self, track_height: Dp) -> Self {
        self.track_height = track_height;
        self
    }

    pub fn with_vertical_handle(mut self, width: Dp, height: Dp) -> Self {
        self.vertical_handle_width = width;
        self.vertical_handle_height = height;
        self
    }

    pub fn with_vertical_inset(mut self, vertical_inset: Dp) -> Self {
        self.vertical_inset = vertical_inset;
        self
    }

    /// Horizontal offset with the panel fully hidden.
    pub fn closed_offset(&self) -> Dp {
        -self.handle_width
    }

    /// Horizontal offset with the panel fully revealed.
    pub fn open_offset(&self) -> Dp {
        self.track_width - self.handle_width
    }

    pub fn vertical_min(&self) -> Dp {
        self.vertical_inset
    }

    pub fn vertical_max(&self) -> Dp {
        self.track_height - self.vertical_handle_height - self.vertical_inset
    }

    pub fn panel_size(&self) -> Size {
        Size::new(self.handle_width.0, self.track_height.0)
    }

    pub fn vertical_handle_size(&self) -> Size {
        Size::new(self.vertical_handle_width.0, self.vertical_handle_height.0)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        let fields = [
            ("track_width", self.track_width),
            ("handle_width", self.handle_width),
            ("track_height", self.track_height),
            ("vertical_handle_width", self.vertical_handle_width),
            ("vertical_handle_height", self.vertical_handle_height),
            ("vertical_inset", self.vertical_inset),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { field });
            }
            if value < Dp::ZERO {
                return Err(GeometryError::Negative { field, value });
            }
        }

        let (min, max) = (self.vertical_min(), self.vertical_max());
        if min > max {
            return Err(GeometryError::InvertedVerticalRange { min, max });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    NonFinite { field: &'static str },
    Negative { field: &'static str, value: Dp },
    InvertedVerticalRange { min: Dp, max: Dp },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NonFinite { field } => write!(f, "{field} is not a finite length"),
            GeometryError::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {}", value.0)
            }
            GeometryError::InvertedVerticalRange { min, max } => write!(
                f,
                "vertical handle does not fit: min offset {} exceeds max offset {}",
                min.0, max.0
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
