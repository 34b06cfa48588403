//! Analytic primitives and the triangle/culling types shared with meshes.

use crate::MaterialId;
use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

/// A sphere primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(origin: Vec3, radius: f32, material: MaterialId) -> Self {
        Self {
            origin,
            radius: radius.max(0.0),
            material,
        }
    }
}

/// An infinite plane through `origin`.
///
/// `normal` may have any non-zero magnitude; it is normalized on use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Plane {
    pub fn new(origin: Vec3, normal: Vec3, material: MaterialId) -> Self {
        Self {
            origin,
            normal,
            material,
        }
    }
}

/// Which triangle faces are excluded from intersection.
///
/// A face is "front" when the ray travels against its normal
/// (`dot(normal, direction) < 0`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CullMode {
    /// Reject rays that see the back face.
    #[default]
    BackFace,
    /// Reject rays that see the front face.
    FrontFace,
    /// Accept both faces.
    None,
}

impl CullMode {
    /// The opposite culling rule, used for shadow rays which approach a
    /// surface from the light's side. `None` maps to itself.
    pub fn inverted(self) -> Self {
        match self {
            CullMode::BackFace => CullMode::FrontFace,
            CullMode::FrontFace => CullMode::BackFace,
            CullMode::None => CullMode::None,
        }
    }

    /// True if a triangle with `normal` must be skipped for a ray travelling
    /// along `direction`. Grazing rays (dot exactly 0) are never culled.
    #[inline]
    pub fn culls(self, normal: Vec3, direction: Vec3) -> bool {
        let facing = normal.dot(direction);
        match self {
            CullMode::BackFace => facing > 0.0,
            CullMode::FrontFace => facing < 0.0,
            CullMode::None => false,
        }
    }
}

/// A single triangle with a precomputed unit normal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Face normal (unit length)
    pub normal: Vec3,
    pub cull_mode: CullMode,
    pub material: MaterialId,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The normal follows the winding: `normalize((v1 - v0) x (v2 - v0))`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal: face_normal(v0, v1, v2),
            cull_mode: CullMode::default(),
            material: MaterialId::default(),
        }
    }

    /// Create a triangle with a pre-computed normal.
    pub fn with_normal(v0: Vec3, v1: Vec3, v2: Vec3, normal: Vec3) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            ..Self::new(v0, v1, v2)
        }
    }

    pub fn with_cull_mode(mut self, cull_mode: CullMode) -> Self {
        self.cull_mode = cull_mode;
        self
    }

    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = material;
        self
    }

    /// Centroid of the three vertices.
    pub fn center(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }
}

/// Unit face normal of a counter-clockwise triangle.
#[inline]
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_negative_radius_clamped() {
        let s = Sphere::new(Vec3::ZERO, -2.0, MaterialId(0));
        assert_eq!(s.radius, 0.0);
    }

    #[test]
    fn test_cull_mode_inverted() {
        assert_eq!(CullMode::BackFace.inverted(), CullMode::FrontFace);
        assert_eq!(CullMode::FrontFace.inverted(), CullMode::BackFace);
        assert_eq!(CullMode::None.inverted(), CullMode::None);
    }

    #[test]
    fn test_cull_mode_culls() {
        let normal = Vec3::NEG_Z;
        let towards = Vec3::Z; // travelling against the normal: front face
        let away = Vec3::NEG_Z;

        assert!(!CullMode::BackFace.culls(normal, towards));
        assert!(CullMode::BackFace.culls(normal, away));
        assert!(CullMode::FrontFace.culls(normal, towards));
        assert!(!CullMode::FrontFace.culls(normal, away));
        assert!(!CullMode::None.culls(normal, towards));
        assert!(!CullMode::None.culls(normal, away));

        // Grazing rays are never culled
        assert!(!CullMode::BackFace.culls(normal, Vec3::X));
        assert!(!CullMode::FrontFace.culls(normal, Vec3::X));
    }

    #[test]
    fn test_triangle_normal_follows_winding() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!((tri.normal - Vec3::Z).length() < 0.001);

        let flipped = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X);
        assert!((flipped.normal - Vec3::NEG_Z).length() < 0.001);
    }

    #[test]
    fn test_triangle_builders() {
        let tri = Triangle::with_normal(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(0.0, 0.0, 4.0))
            .with_cull_mode(CullMode::None)
            .with_material(MaterialId(3));

        assert_eq!(tri.normal, Vec3::Z);
        assert_eq!(tri.cull_mode, CullMode::None);
        assert_eq!(tri.material, MaterialId(3));
        assert!((tri.center() - Vec3::new(1.0 / 3.0, 1.0 / 3.0, 0.0)).length() < 0.001);
    }
}
