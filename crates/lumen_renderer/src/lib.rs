//! Lumen Renderer - CPU ray tracing
//!
//! Casts one primary ray per pixel into a [`Scene`](lumen_core::Scene),
//! finds the closest hit and shades it with direct lighting from every
//! light, optionally shadowed. Pixels are rendered in parallel with rayon.
//!
//! ```no_run
//! use lumen_core::{colors, Material, Scene};
//! use lumen_math::Vec3;
//! use lumen_renderer::{render, Camera, FrameBuffer, RenderConfig};
//!
//! let mut scene = Scene::new();
//! let red = scene.add_material(Material::lambert(colors::RED, 1.0));
//! scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, red);
//! scene.add_point_light(Vec3::new(0.0, 5.0, -5.0), 50.0, colors::WHITE);
//!
//! let camera = Camera::new(Vec3::new(0.0, 1.0, -5.0), 45.0);
//! let mut frame = FrameBuffer::new(640, 480);
//! render(&scene, &camera, &RenderConfig::default(), &mut frame)?;
//! frame.save("sphere.png")?;
//! # Ok::<(), lumen_renderer::RenderError>(())
//! ```

mod camera;
mod error;
mod hittable;
mod output;
mod query;
mod renderer;

pub use camera::Camera;
pub use error::RenderError;
pub use hittable::{CulledHittable, Hittable};
pub use output::FrameBuffer;
pub use query::SceneQuery;
pub use renderer::{render, render_pixel, shade_pixel, LightingMode, RenderConfig, RenderStats};
