//! Point and directional lights.

use crate::Color;
use lumen_math::Vec3;

/// Where a light sits, or which way it shines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Radiates from a position with inverse-square falloff.
    Point { origin: Vec3 },
    /// Parallel rays travelling along `direction`, no falloff.
    Directional { direction: Vec3 },
}

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub intensity: f32,
    pub color: Color,
}

impl Light {
    pub fn point(origin: Vec3, intensity: f32, color: Color) -> Self {
        Self {
            kind: LightKind::Point { origin },
            intensity,
            color,
        }
    }

    pub fn directional(direction: Vec3, intensity: f32, color: Color) -> Self {
        Self {
            kind: LightKind::Directional { direction },
            intensity,
            color,
        }
    }

    /// Unnormalized vector from `target` towards the light.
    ///
    /// Directional lights have no position, so this is `-direction`.
    pub fn direction_to_light(&self, target: Vec3) -> Vec3 {
        match self.kind {
            LightKind::Point { origin } => origin - target,
            LightKind::Directional { direction } => -direction,
        }
    }

    /// Unit direction from `target` towards the light and the distance to it.
    ///
    /// Directional lights report an infinite distance.
    pub fn direction_and_distance(&self, target: Vec3) -> (Vec3, f32) {
        let to_light = self.direction_to_light(target);
        match self.kind {
            LightKind::Point { .. } => {
                let distance = to_light.length();
                (to_light.normalize_or_zero(), distance)
            }
            LightKind::Directional { .. } => (to_light.normalize_or_zero(), f32::INFINITY),
        }
    }

    /// Incident radiance arriving at `target`.
    ///
    /// Point lights fall off with the squared distance; directional lights
    /// deliver `color * intensity` everywhere.
    pub fn radiance(&self, target: Vec3) -> Color {
        match self.kind {
            LightKind::Point { origin } => {
                let irradiance = self.intensity / (origin - target).length_squared();
                self.color * irradiance
            }
            LightKind::Directional { .. } => self.color * self.intensity,
        }
    }
}
