//! The reference scene: a lit box with six Cook-Torrence spheres and three
//! spinning triangles, one per cull mode.

use lumen_core::{colors, Color, CullMode, Material, MaterialError, Scene, Triangle, TriangleMesh};
use lumen_math::Vec3;
use lumen_renderer::Camera;
use std::f32::consts::TAU;

pub struct ReferenceScene {
    pub scene: Scene,
    pub camera: Camera,
    meshes: [usize; 3],
}

impl ReferenceScene {
    pub fn new() -> Result<Self, MaterialError> {
        let mut scene = Scene::new();
        let camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

        let metal = Color::new(0.972, 0.960, 0.915);
        let plastic = Color::splat(0.75);
        let rough_metal = scene.add_material(Material::cook_torrence(metal, 1.0, 1.0)?);
        let medium_metal = scene.add_material(Material::cook_torrence(metal, 1.0, 0.6)?);
        let smooth_metal = scene.add_material(Material::cook_torrence(metal, 1.0, 0.1)?);
        let rough_plastic = scene.add_material(Material::cook_torrence(plastic, 0.0, 1.0)?);
        let medium_plastic = scene.add_material(Material::cook_torrence(plastic, 0.0, 0.6)?);
        let smooth_plastic = scene.add_material(Material::cook_torrence(plastic, 0.0, 0.1)?);

        let gray_blue = scene.add_material(Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0));
        let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));

        // Walls
        scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, gray_blue);
        scene.add_plane(Vec3::ZERO, Vec3::Y, gray_blue);
        scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, gray_blue);
        scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X, gray_blue);
        scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, gray_blue);

        scene.add_sphere(Vec3::new(-1.75, 1.0, 0.0), 0.75, rough_metal);
        scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 0.75, medium_metal);
        scene.add_sphere(Vec3::new(1.75, 1.0, 0.0), 0.75, smooth_metal);
        scene.add_sphere(Vec3::new(-1.75, 3.0, 0.0), 0.75, rough_plastic);
        scene.add_sphere(Vec3::new(0.0, 3.0, 0.0), 0.75, medium_plastic);
        scene.add_sphere(Vec3::new(1.75, 3.0, 0.0), 0.75, smooth_plastic);

        let base = Triangle::new(
            Vec3::new(-0.75, 1.5, 0.0),
            Vec3::new(0.75, 0.0, 0.0),
            Vec3::new(-0.75, 0.0, 0.0),
        );
        let placements = [
            (CullMode::BackFace, -1.75),
            (CullMode::FrontFace, 0.0),
            (CullMode::None, 1.75),
        ];
        let meshes = placements.map(|(cull_mode, x)| {
            let mut mesh = TriangleMesh::new(cull_mode, white);
            mesh.append_triangle(&base, true);
            mesh.translate(Vec3::new(x, 4.5, 0.0));
            mesh.update_transforms();
            scene.add_triangle_mesh(mesh)
        });

        scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
        scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));
        scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Color::new(0.34, 0.47, 0.68));

        log::info!(
            "Reference scene: {} primitives, {} materials, {} lights",
            scene.primitive_count(),
            scene.materials().len(),
            scene.lights().len()
        );

        Ok(Self {
            scene,
            camera,
            meshes,
        })
    }

    /// Advance the animation to `total_seconds`. Must run between renders.
    pub fn update(&mut self, total_seconds: f32) {
        let yaw = mesh_yaw(total_seconds);
        for &index in &self.meshes {
            if let Some(mesh) = self.scene.mesh_mut(index) {
                mesh.rotate_y(yaw);
                mesh.update_transforms();
            }
        }
        log::trace!("Meshes rotated to {:.3} rad", yaw);
    }
}

/// Yaw of the spinning triangles, easing back and forth over a full turn.
fn mesh_yaw(total_seconds: f32) -> f32 {
    (total_seconds.cos() + 1.0) / 2.0 * TAU
}
