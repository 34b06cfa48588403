//! Direct-lighting renderer.
//!
//! One primary ray per pixel. Each hit gathers light from every scene light,
//! optionally tested for occlusion with a shadow ray, and is combined
//! according to the active [`LightingMode`].

use crate::query::SceneQuery;
use crate::{Camera, FrameBuffer, RenderError};
use lumen_core::{to_rgb8, Color, HitRecord, Scene};
use lumen_math::{Ray, Vec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Which lighting term ends up in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    /// Cosine foreshortening only, in white
    ObservedArea,
    /// Incident radiance only
    Radiance,
    /// Material BRDF only
    Brdf,
    /// Radiance x observed area x BRDF
    #[default]
    Combined,
}

impl LightingMode {
    /// Cycle to the next mode: observed area, radiance, BRDF, combined.
    pub fn next(self) -> Self {
        match self {
            LightingMode::ObservedArea => LightingMode::Radiance,
            LightingMode::Radiance => LightingMode::Brdf,
            LightingMode::Brdf => LightingMode::Combined,
            LightingMode::Combined => LightingMode::ObservedArea,
        }
    }
}

impl fmt::Display for LightingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LightingMode::ObservedArea => "observed area",
            LightingMode::Radiance => "radiance",
            LightingMode::Brdf => "BRDF",
            LightingMode::Combined => "combined",
        };
        f.write_str(name)
    }
}

/// Render configuration, passed into every render call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub lighting_mode: LightingMode,
    /// Cast shadow rays towards each light
    pub shadows_enabled: bool,
    /// Offset along the normal for shadow ray origins
    pub shadow_bias: f32,
    /// Offset along the normal when measuring the direction to a light
    pub light_bias: f32,
    /// Color of pixels whose primary ray hits nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lighting_mode: LightingMode::default(),
            shadows_enabled: false,
            shadow_bias: 0.1,
            light_bias: 0.001,
            background: Color::ZERO,
        }
    }
}

/// Summary of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub pixels: usize,
    /// Pixels whose primary ray hit geometry
    pub hits: usize,
    pub elapsed: Duration,
}

impl RenderStats {
    pub fn hit_ratio(&self) -> f32 {
        if self.pixels == 0 {
            0.0
        } else {
            self.hits as f32 / self.pixels as f32
        }
    }
}

/// Linear color of a surface hit, summed over all lights.
///
/// `view_dir` is the unit direction of the incoming ray (camera to hit).
/// Lights behind the surface, and lights blocked while shadows are
/// enabled, contribute nothing in every mode.
pub fn shade_pixel(scene: &Scene, hit: &HitRecord, view_dir: Vec3, config: &RenderConfig) -> Color {
    let Some(material) = scene.material(hit.material) else {
        return Color::ZERO;
    };

    let mut color = Color::ZERO;
    for light in scene.lights() {
        let (light_dir, light_distance) =
            light.direction_and_distance(hit.origin + hit.normal * config.light_bias);

        let observed_area = hit.normal.dot(light_dir);
        if observed_area <= 0.0 {
            continue;
        }

        if config.shadows_enabled {
            let shadow_ray = Ray::new(hit.origin + hit.normal * config.shadow_bias, light_dir)
                .with_max(light_distance);
            if scene.does_hit(&shadow_ray) {
                continue;
            }
        }

        color += match config.lighting_mode {
            LightingMode::ObservedArea => Color::splat(observed_area),
            LightingMode::Radiance => light.radiance(hit.origin),
            LightingMode::Brdf => material.shade(hit, light_dir, view_dir),
            LightingMode::Combined => {
                light.radiance(hit.origin) * observed_area * material.shade(hit, light_dir, view_dir)
            }
        };
    }

    color
}

/// Linear color seen through pixel (`x`, `y`), or `None` when the primary
/// ray hits nothing.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Option<Color> {
    let ray = camera.ray_for_pixel(x, y, width, height);
    scene
        .closest_hit(&ray)
        .map(|hit| shade_pixel(scene, &hit, ray.direction, config))
}

/// Render the scene into `frame`, in parallel across pixels.
///
/// The scene is validated first; it must not change during the call.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    frame: &mut FrameBuffer,
) -> Result<RenderStats, RenderError> {
    scene.validate()?;

    let start = Instant::now();
    let (width, height) = (frame.width, frame.height);

    let hits: usize = frame
        .pixels
        .par_iter_mut()
        .enumerate()
        .map(|(index, pixel)| {
            let x = (index % width as usize) as u32;
            let y = (index / width as usize) as u32;

            let color = render_pixel(scene, camera, config, x, y, width, height);
            *pixel = to_rgb8(color.unwrap_or(config.background));
            usize::from(color.is_some())
        })
        .sum();

    let stats = RenderStats {
        pixels: frame.pixels.len(),
        hits,
        elapsed: start.elapsed(),
    };

    log::debug!(
        "Rendered {}x{} ({} mode, shadows {}): {} hits in {:.2?}",
        width,
        height,
        config.lighting_mode,
        if config.shadows_enabled { "on" } else { "off" },
        stats.hits,
        stats.elapsed
    );

    Ok(stats)
}
