use glam::Vec2;
use mouseflyer_core::DEFAULT_OUTER_RADIUS_RATIO;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("screen width must be positive and finite, got {0}")]
    Width(f32),
    #[error("screen height must be positive and finite, got {0}")]
    Height(f32),
    #[error("outer radius ratio must be positive and finite, got {0}")]
    OuterRadiusRatio(f32),
}

/// Screen extent in pixels, origin bottom-left, y up.
///
/// Only constructible through [`ScreenGeometry::new`], so `max_radius()` is
/// always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    width: f32,
    height: f32,
    outer_radius_ratio: f32,
}

impl ScreenGeometry {
    pub fn new(width: f32, height: f32, outer_radius_ratio: f32) -> Result<Self, GeometryError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(GeometryError::Width(width));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(GeometryError::Height(height));
        }
        if !(outer_radius_ratio.is_finite() && outer_radius_ratio > 0.0) {
            return Err(GeometryError::OuterRadiusRatio(outer_radius_ratio));
        }
        Ok(Self {
            width,
            height,
            outer_radius_ratio,
        })
    }

    pub fn with_default_ratio(width: f32, height: f32) -> Result<Self, GeometryError> {
        Self::new(width, height, DEFAULT_OUTER_RADIUS_RATIO)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn outer_radius_ratio(&self) -> f32 {
        self.outer_radius_ratio
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn max_radius(&self) -> f32 {
        self.height * self.outer_radius_ratio
    }

    pub fn deadzone_radius(&self, deadzone: f32) -> f32 {
        self.max_radius() * deadzone
    }

    pub fn clamp_to_bounds(&self, point: Vec2) -> Vec2 {
        point.clamp(Vec2::ZERO, Vec2::new(self.width, self.height))
    }
}
