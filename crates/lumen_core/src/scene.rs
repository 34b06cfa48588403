//! Scene storage: geometry, materials and lights.
//!
//! The scene is populated before rendering and only mutated between frames.
//! Primitives refer to materials by [`MaterialId`] into an append-only table,
//! so geometry can be copied around freely.

use crate::light::Light;
use crate::material::{Material, MaterialId};
use crate::mesh::TriangleMesh;
use crate::primitives::{Plane, Sphere};
use crate::Color;
use lumen_math::Vec3;
use thiserror::Error;

/// Errors found when checking a scene for consistency.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("{kind} {index} references unknown material {material:?} (table has {count} entries)")]
    UnknownMaterial {
        kind: &'static str,
        index: usize,
        material: MaterialId,
        count: usize,
    },
}

/// All renderable content of a frame.
#[derive(Clone, Debug)]
pub struct Scene {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    meshes: Vec<TriangleMesh>,
    materials: Vec<Material>,
    lights: Vec<Light>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Material 0 of every scene: solid red.
    pub const DEFAULT_MATERIAL: MaterialId = MaterialId(0);

    /// Create an empty scene holding only the default material.
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            planes: Vec::new(),
            meshes: Vec::new(),
            materials: vec![Material::default()],
            lights: Vec::new(),
        }
    }

    /// Add a material and return its id.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn add_sphere(&mut self, origin: Vec3, radius: f32, material: MaterialId) -> usize {
        self.spheres.push(Sphere::new(origin, radius, material));
        self.spheres.len() - 1
    }

    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material: MaterialId) -> usize {
        self.planes.push(Plane::new(origin, normal, material));
        self.planes.len() - 1
    }

    /// Add a mesh. Its caches should already be current; use
    /// [`mesh_mut`](Self::mesh_mut) for later transform updates.
    pub fn add_triangle_mesh(&mut self, mesh: TriangleMesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn add_point_light(&mut self, origin: Vec3, intensity: f32, color: Color) -> usize {
        self.lights.push(Light::point(origin, intensity, color));
        self.lights.len() - 1
    }

    pub fn add_directional_light(&mut self, direction: Vec3, intensity: f32, color: Color) -> usize {
        self.lights.push(Light::directional(direction, intensity, color));
        self.lights.len() - 1
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn meshes(&self) -> &[TriangleMesh] {
        &self.meshes
    }

    pub fn mesh_mut(&mut self, index: usize) -> Option<&mut TriangleMesh> {
        self.meshes.get_mut(index)
    }

    pub fn meshes_mut(&mut self) -> &mut [TriangleMesh] {
        &mut self.meshes
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Total number of analytic primitives and mesh triangles.
    pub fn primitive_count(&self) -> usize {
        self.spheres.len()
            + self.planes.len()
            + self.meshes.iter().map(TriangleMesh::triangle_count).sum::<usize>()
    }

    /// Check that every primitive references an existing material.
    pub fn validate(&self) -> Result<(), SceneError> {
        let count = self.materials.len();
        let referenced = self
            .spheres
            .iter()
            .enumerate()
            .map(|(i, s)| ("sphere", i, s.material))
            .chain(self.planes.iter().enumerate().map(|(i, p)| ("plane", i, p.material)))
            .chain(self.meshes.iter().enumerate().map(|(i, m)| ("mesh", i, m.material)));

        for (kind, index, material) in referenced {
            if material.0 >= count {
                return Err(SceneError::UnknownMaterial {
                    kind,
                    index,
                    material,
                    count,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::primitives::{CullMode, Triangle};

    #[test]
    fn test_new_scene_has_default_material() {
        let scene = Scene::new();
        assert_eq!(scene.materials().len(), 1);
        assert_eq!(
            scene.material(Scene::DEFAULT_MATERIAL),
            Some(&Material::solid_color(colors::RED))
        );
    }

    #[test]
    fn test_add_returns_stable_indices() {
        let mut scene = Scene::new();
        let blue = scene.add_material(Material::solid_color(colors::BLUE));
        let yellow = scene.add_material(Material::lambert(colors::YELLOW, 1.0));
        assert_eq!(blue, MaterialId(1));
        assert_eq!(yellow, MaterialId(2));

        assert_eq!(scene.add_sphere(Vec3::ZERO, 1.0, blue), 0);
        assert_eq!(scene.add_sphere(Vec3::X, 1.0, blue), 1);
        assert_eq!(scene.add_plane(Vec3::ZERO, Vec3::Y, yellow), 0);
        assert_eq!(scene.add_point_light(Vec3::Y, 1.0, colors::WHITE), 0);
        assert_eq!(scene.add_directional_light(Vec3::NEG_Y, 1.0, colors::WHITE), 1);

        assert_eq!(scene.spheres()[1].origin, Vec3::X);
        assert_eq!(scene.lights().len(), 2);
    }

    #[test]
    fn test_mesh_mut_between_frames() {
        let mut scene = Scene::new();
        let mut mesh = TriangleMesh::new(CullMode::BackFace, Scene::DEFAULT_MATERIAL);
        mesh.append_triangle(&Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y), false);
        let index = scene.add_triangle_mesh(mesh);

        let mesh = scene.mesh_mut(index).unwrap();
        mesh.translate(Vec3::new(0.0, 2.0, 0.0));
        mesh.update_transforms();

        assert_eq!(scene.meshes()[0].triangle(0).v0, Vec3::new(0.0, 2.0, 0.0));
        assert!(scene.mesh_mut(5).is_none());
        assert_eq!(scene.primitive_count(), 1);
    }

    #[test]
    fn test_validate_unknown_material() {
        let mut scene = Scene::new();
        scene.add_sphere(Vec3::ZERO, 1.0, Scene::DEFAULT_MATERIAL);
        assert!(scene.validate().is_ok());

        scene.add_plane(Vec3::ZERO, Vec3::Y, MaterialId(7));
        let err = scene.validate().unwrap_err();
        assert_eq!(
            err,
            SceneError::UnknownMaterial {
                kind: "plane",
                index: 0,
                material: MaterialId(7),
                count: 1,
            }
        );
        assert!(err.to_string().contains("plane 0"));
    }
}
