//! Lumen Core - scene data for the lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry**: `Sphere`, `Plane`, `Triangle`, `TriangleMesh`
//! - **Shading**: the `Material` set and the BRDF terms it is built from
//! - **Lighting**: point and directional `Light`s
//! - **Storage**: the `Scene` arena that owns all of the above
//!
//! Intersection and rendering live in `lumen_renderer`.
//!
//! # Example
//!
//! ```
//! use lumen_core::{colors, Material, Scene};
//! use lumen_math::Vec3;
//!
//! let mut scene = Scene::new();
//! let red = scene.add_material(Material::lambert(colors::RED, 1.0));
//! scene.add_sphere(Vec3::ZERO, 1.0, red);
//! scene.add_point_light(Vec3::new(0.0, 5.0, 0.0), 16.0, colors::WHITE);
//! assert!(scene.validate().is_ok());
//! ```

pub mod brdf;
pub mod color;
pub mod hit;
pub mod light;
pub mod material;
pub mod mesh;
pub mod primitives;
pub mod scene;

// Re-export commonly used types
pub use color::{colors, max_to_one, to_rgb8, Color};
pub use hit::HitRecord;
pub use light::{Light, LightKind};
pub use material::{CookTorrence, Lambert, LambertPhong, Material, MaterialError, MaterialId, SolidColor};
pub use mesh::{MeshError, Transform, TriangleMesh};
pub use primitives::{CullMode, Plane, Sphere, Triangle};
pub use scene::{Scene, SceneError};
