use crate::Vec3;

/// Default lower bound of the valid intersection range.
pub const RAY_EPSILON: f32 = 1e-4;

/// A ray in 3D space with a valid parameter range `[min, max)`.
///
/// The direction is stored as given; callers normalize where they need to.
/// Each primitive decides whether its bounds are inclusive or exclusive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub min: f32,
    pub max: f32,
}

impl Ray {
    /// Create a new ray with the default range `[RAY_EPSILON, f32::MAX)`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            min: RAY_EPSILON,
            max: f32::MAX,
        }
    }

    /// Create a ray with an explicit parameter range.
    pub fn with_bounds(origin: Vec3, direction: Vec3, min: f32, max: f32) -> Self {
        Self {
            origin,
            direction,
            min,
            max,
        }
    }

    /// Returns a copy of this ray with its upper bound replaced.
    #[inline]
    pub fn with_max(mut self, max: f32) -> Self {
        self.max = max;
        self
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
