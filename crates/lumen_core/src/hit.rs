//! Result of a successful ray-primitive intersection.

use crate::MaterialId;
use lumen_math::Vec3;

/// Record of a ray-object intersection.
///
/// A miss is represented by the absence of a record (`Option::None`),
/// never by a record with a sentinel `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HitRecord {
    /// World-space point of intersection
    pub origin: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Ray parameter of the intersection
    pub t: f32,
    /// Material of the primitive that was hit
    pub material: MaterialId,
}

impl HitRecord {
    /// Pick the closer of two optional hits.
    ///
    /// On an exact tie the first argument wins, so folding primitives in
    /// test order keeps the earliest-tested one.
    #[inline]
    pub fn closer(current: Option<HitRecord>, candidate: Option<HitRecord>) -> Option<HitRecord> {
        match (current, candidate) {
            (Some(a), Some(b)) if b.t < a.t => Some(b),
            (None, b) => b,
            (a, _) => a,
        }
    }
}
