//! Point lights.

use std::f64::consts::PI;

use prism_math::{ColorRgb, Vector3};

/// An isotropic point light with inverse-square falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    position: Vector3,
    color: ColorRgb,
    intensity: f64,
}

impl PointLight {
    pub fn new(position: Vector3, color: ColorRgb, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn color(&self) -> ColorRgb {
        self.color
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Light arriving at `distance` from the source:
    /// `color * intensity / (4 pi distance^2)`.
    ///
    /// `distance` must be non-zero.
    pub fn illumination_at(&self, distance: f64) -> ColorRgb {
        self.color * (self.intensity / (4.0 * PI * distance * distance))
    }
}
