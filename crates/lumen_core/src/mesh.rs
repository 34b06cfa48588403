//! Triangle mesh geometry with cached world-space data.
//!
//! A mesh stores its source data in local space (positions, one normal per
//! triangle, and a flat index list with stride 3). Rendering reads the
//! transformed copies and the world-space bounding box, which are only
//! valid after [`TriangleMesh::update_transforms`] has run.

use crate::primitives::{face_normal, CullMode, Triangle};
use crate::MaterialId;
use lumen_math::{Aabb, Mat4, Mat4Ext, Quat, Vec3};
use thiserror::Error;

/// Errors raised when mesh source data violates the mesh invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("index count {0} is not a multiple of 3")]
    IndexStride(usize),

    #[error("expected {expected} normals (one per triangle), found {found}")]
    NormalCount { expected: usize, found: usize },

    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },
}

/// Transform components that can be composed into a matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation
    pub translation: Vec3,

    /// Rotation (as quaternion)
    pub rotation: Quat,

    /// Scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Convert to a 4x4 transformation matrix.
    ///
    /// Order: Scale -> Rotate -> Translate (SRT)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// A triangle mesh referenced by index triples.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    /// Local-space vertex positions
    pub positions: Vec<Vec3>,

    /// Local-space face normals, one per triangle
    pub normals: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    pub cull_mode: CullMode,
    pub material: MaterialId,

    /// Local-to-world transform, applied by `update_transforms`
    pub transform: Transform,

    transformed_positions: Vec<Vec3>,
    transformed_normals: Vec<Vec3>,
    local_bounds: Aabb,
    world_bounds: Aabb,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new(cull_mode: CullMode, material: MaterialId) -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            cull_mode,
            material,
            transform: Transform::default(),
            transformed_positions: Vec::new(),
            transformed_normals: Vec::new(),
            local_bounds: Aabb::EMPTY,
            world_bounds: Aabb::EMPTY,
        }
    }

    /// Create a mesh from loader output, validating the mesh invariants.
    ///
    /// The world-space caches are populated with the identity transform.
    pub fn from_parts(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        indices: Vec<u32>,
        cull_mode: CullMode,
        material: MaterialId,
    ) -> Result<Self, MeshError> {
        validate(&positions, &normals, &indices)?;

        log::debug!(
            "Mesh created: {} vertices, {} triangles",
            positions.len(),
            indices.len() / 3
        );

        let mut mesh = Self::new(cull_mode, material);
        mesh.positions = positions;
        mesh.normals = normals;
        mesh.indices = indices;
        mesh.update_transforms();
        Ok(mesh)
    }

    /// Append a triangle, taking its vertices and normal as given.
    ///
    /// Pass `skip_update = true` when appending many triangles and call
    /// [`update_transforms`](Self::update_transforms) once afterwards.
    pub fn append_triangle(&mut self, triangle: &Triangle, skip_update: bool) {
        let start = self.positions.len() as u32;
        self.positions
            .extend_from_slice(&[triangle.v0, triangle.v1, triangle.v2]);
        self.indices.extend_from_slice(&[start, start + 1, start + 2]);
        self.normals.push(triangle.normal);

        if !skip_update {
            self.update_transforms();
        }
    }

    /// Recompute every face normal from the current positions and winding.
    pub fn calculate_normals(&mut self) {
        self.normals = self
            .indices
            .chunks_exact(3)
            .map(|face| {
                face_normal(
                    self.positions[face[0] as usize],
                    self.positions[face[1] as usize],
                    self.positions[face[2] as usize],
                )
            })
            .collect();
    }

    /// Set the translation component of the transform.
    pub fn translate(&mut self, translation: Vec3) {
        self.transform.translation = translation;
    }

    /// Set the rotation to `yaw` radians about the world Y axis.
    pub fn rotate_y(&mut self, yaw: f32) {
        self.transform.rotation = Quat::from_rotation_y(yaw);
    }

    /// Set the scale component of the transform.
    pub fn scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }

    /// Recompute the local-space bounding box from the source positions.
    pub fn update_aabb(&mut self) {
        self.local_bounds = Aabb::from_slice(&self.positions);
    }

    /// Recompute the transformed positions, normals and the world-space
    /// bounding box from the source data and the current transform.
    pub fn update_transforms(&mut self) {
        self.update_aabb();

        let matrix = self.transform.to_matrix();
        self.transformed_positions = self
            .positions
            .iter()
            .map(|&p| matrix.transform_point3(p))
            .collect();
        self.transformed_normals = self
            .normals
            .iter()
            .map(|&n| matrix.transform_normal(n))
            .collect();
        self.world_bounds = matrix.transform_aabb(&self.local_bounds);

        log::trace!(
            "Mesh transforms updated: {} vertices, bounds {:?}",
            self.transformed_positions.len(),
            self.world_bounds
        );
    }

    /// World-space positions from the last transform update.
    pub fn transformed_positions(&self) -> &[Vec3] {
        &self.transformed_positions
    }

    /// World-space face normals from the last transform update.
    pub fn transformed_normals(&self) -> &[Vec3] {
        &self.transformed_normals
    }

    /// Local-space bounds from the last `update_aabb`.
    pub fn local_bounds(&self) -> Aabb {
        self.local_bounds
    }

    /// World-space bounds from the last transform update.
    pub fn world_bounds(&self) -> Aabb {
        self.world_bounds
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// World-space triangle `i`, carrying the mesh's cull mode and material.
    ///
    /// # Panics
    /// If `i` is out of range or the caches are stale.
    #[inline]
    pub fn triangle(&self, i: usize) -> Triangle {
        self.triangle_with_cull(i, self.cull_mode)
    }

    /// World-space triangle `i` with an explicit cull mode.
    #[inline]
    pub fn triangle_with_cull(&self, i: usize, cull_mode: CullMode) -> Triangle {
        let base = i * 3;
        let p = &self.transformed_positions;
        Triangle {
            v0: p[self.indices[base] as usize],
            v1: p[self.indices[base + 1] as usize],
            v2: p[self.indices[base + 2] as usize],
            normal: self.transformed_normals[i],
            cull_mode,
            material: self.material,
        }
    }

    /// Iterate over all world-space triangles.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.triangle_count()).map(move |i| self.triangle(i))
    }
}

fn validate(positions: &[Vec3], normals: &[Vec3], indices: &[u32]) -> Result<(), MeshError> {
    if indices.len() % 3 != 0 {
        return Err(MeshError::IndexStride(indices.len()));
    }

    let expected = indices.len() / 3;
    if normals.len() != expected {
        return Err(MeshError::NormalCount {
            expected,
            found: normals.len(),
        });
    }

    if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(MeshError::IndexOutOfBounds {
            index,
            vertex_count: positions.len(),
        });
    }

    Ok(())
}
