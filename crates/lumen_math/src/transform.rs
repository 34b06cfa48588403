// Transform utilities for Mat4
//
// glam::Mat4 already provides transform_point3() and transform_vector3();
// this adds the pieces needed to keep mesh caches in world space.

use crate::Aabb;
use glam::{Mat3, Mat4, Vec3};

/// Extension trait for Mat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Transform a surface normal (inverse-transpose of the linear part),
    /// returning a unit vector.
    fn transform_normal(&self, normal: Vec3) -> Vec3;

    /// Transform an axis-aligned bounding box.
    /// Computes the bounding box of all 8 transformed corners.
    fn transform_aabb(&self, aabb: &Aabb) -> Aabb;
}

impl Mat4Ext for Mat4 {
    fn transform_normal(&self, normal: Vec3) -> Vec3 {
        let normal_matrix = Mat3::from_mat4(*self).inverse().transpose();
        (normal_matrix * normal).normalize_or_zero()
    }

    fn transform_aabb(&self, aabb: &Aabb) -> Aabb {
        if aabb.is_empty() {
            return Aabb::EMPTY;
        }

        aabb.corners()
            .iter()
            .map(|&corner| self.transform_point3(corner))
            .fold(Aabb::EMPTY, |bounds, corner| bounds.grow(corner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_transform_normal_identity() {
        let n = Vec3::new(0.0, 0.0, -1.0);
        assert_eq!(Mat4::IDENTITY.transform_normal(n), n);
    }

    #[test]
    fn test_transform_normal_ignores_translation() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let n = Vec3::Y;
        assert!((mat.transform_normal(n) - n).length() < 0.001);
    }

    #[test]
    fn test_transform_normal_rotation() {
        // 90 degree rotation around Y maps +Z onto +X
        let mat = Mat4::from_rotation_y(PI / 2.0);
        let transformed = mat.transform_normal(Vec3::Z);
        assert!((transformed - Vec3::X).length() < 0.001);
    }

    #[test]
    fn test_transform_normal_non_uniform_scale() {
        // A 45 degree slope stretched along x must tilt its normal towards y.
        let mat = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();
        let transformed = mat.transform_normal(n);

        assert!((transformed.length() - 1.0).abs() < 0.001);
        assert!(transformed.y > transformed.x);
    }

    #[test]
    fn test_transform_aabb_identity() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        let transformed = Mat4::IDENTITY.transform_aabb(&aabb);

        assert!((transformed.min - aabb.min).length() < 0.001);
        assert!((transformed.max - aabb.max).length() < 0.001);
    }

    #[test]
    fn test_transform_aabb_translation() {
        let mat = Mat4::from_translation(Vec3::splat(5.0));
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        let transformed = mat.transform_aabb(&aabb);

        assert!((transformed.min - Vec3::splat(5.0)).length() < 0.001);
        assert!((transformed.max - Vec3::splat(6.0)).length() < 0.001);
    }

    #[test]
    fn test_transform_aabb_rotation_grows_box() {
        let mat = Mat4::from_rotation_y(PI / 4.0);
        let aabb = Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0));
        let transformed = mat.transform_aabb(&aabb);

        let half_diagonal = 2.0_f32.sqrt();
        assert!((transformed.max.x - half_diagonal).abs() < 0.001);
        assert!((transformed.max.y - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_transform_aabb_empty_stays_empty() {
        let mat = Mat4::from_translation(Vec3::ONE);
        assert!(mat.transform_aabb(&Aabb::EMPTY).is_empty());
    }
}
