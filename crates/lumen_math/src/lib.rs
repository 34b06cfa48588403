// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod aabb;
mod ray;
mod transform;

pub use aabb::Aabb;
pub use ray::{Ray, RAY_EPSILON};
pub use transform::Mat4Ext;

/// Tolerance used for "approximately zero" comparisons.
pub const EPSILON: f32 = 1e-5;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_reject() {
        let l = Vec3::new(1.0, 2.0, 0.0);
        let d = Vec3::X;
        let rejected = l.reject_from_normalized(d);
        assert_eq!(rejected, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-7));
        assert!(!approx_eq(1.0, 1.001));
    }
}
