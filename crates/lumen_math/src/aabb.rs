use crate::{Ray, Vec3};

/// Axis-Aligned Bounding Box used to reject rays before exact primitive tests.
///
/// An AABB is defined by its minimum and maximum corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from two corner points (in any order).
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create the tightest AABB around a set of points.
    ///
    /// Returns [`Aabb::EMPTY`] when `points` is empty.
    pub fn from_slice(points: &[Vec3]) -> Self {
        points.iter().fold(Self::EMPTY, |aabb, &p| aabb.grow(p))
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            min: box0.min.min(box1.min),
            max: box0.max.max(box1.max),
        }
    }

    /// Returns this box extended to contain `point`.
    pub fn grow(&self, point: Vec3) -> Aabb {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// True if the box contains nothing (min > max on some axis).
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// The eight corners of the box.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Test if a ray intersects this AABB.
    ///
    /// Uses the slab method: the per-axis entry/exit parameters are
    /// intersected, and the ray misses when that interval is empty or lies
    /// entirely behind the origin. The ray's own `[min, max]` range is not
    /// applied here; this is only a conservative pre-filter.
    pub fn hit(&self, ray: &Ray) -> bool {
        if self.is_empty() {
            return false;
        }

        let inv_dir = ray.direction.recip();
        let t0 = (self.min - ray.origin) * inv_dir;
        let t1 = (self.max - ray.origin) * inv_dir;

        // f32::min/max ignore NaN, so axes where 0 * inf occurs drop out.
        let t_near = t0.min(t1).max_element();
        let t_far = t0.max(t1).min_element();

        t_far > 0.0 && t_far >= t_near
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// An empty box; growing it by any point yields that point.
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(Vec3::new(10.0, 0.0, 10.0), Vec3::new(0.0, 10.0, 0.0));

        assert_eq!(aabb.min, Vec3::ZERO);
        assert_eq!(aabb.max, Vec3::splat(10.0));
    }

    #[test]
    fn test_aabb_from_slice() {
        let points = [
            Vec3::new(-1.0, 2.0, 0.5),
            Vec3::new(3.0, -4.0, 0.0),
            Vec3::new(0.0, 0.0, 7.0),
        ];
        let aabb = Aabb::from_slice(&points);
        assert_eq!(aabb.min, Vec3::new(-1.0, -4.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(3.0, 2.0, 7.0));

        assert!(Aabb::from_slice(&[]).is_empty());
    }

    #[test]
    fn test_aabb_surrounding() {
        let box1 = Aabb::from_points(Vec3::ZERO, Vec3::splat(5.0));
        let box2 = Aabb::from_points(Vec3::splat(3.0), Vec3::splat(10.0));
        let surrounding = Aabb::surrounding(&box1, &box2);

        assert_eq!(surrounding.min, Vec3::ZERO);
        assert_eq!(surrounding.max, Vec3::splat(10.0));
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0));

        // Ray pointing at center
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(aabb.hit(&ray));

        // Ray pointing away
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::NEG_Z);
        assert!(!aabb.hit(&ray));

        // Ray missing the box
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Z);
        assert!(!aabb.hit(&ray));

        // Ray starting inside
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.3, -0.2, 1.0));
        assert!(aabb.hit(&ray));
    }

    #[test]
    fn test_aabb_hit_flat_box() {
        // Zero thickness along z, like a single triangle in the XY plane.
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let ray = Ray::new(Vec3::new(0.2, 0.1, -3.0), Vec3::Z);
        assert!(aabb.hit(&ray));

        let ray = Ray::new(Vec3::new(2.0, 0.1, -3.0), Vec3::Z);
        assert!(!aabb.hit(&ray));
    }

    #[test]
    fn test_aabb_empty_never_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(!Aabb::EMPTY.hit(&ray));
    }

    #[test]
    fn test_aabb_centroid_and_corners() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::splat(10.0));
        assert_eq!(aabb.centroid(), Vec3::splat(5.0));

        let corners = aabb.corners();
        assert_eq!(corners[0], aabb.min);
        assert_eq!(corners[7], aabb.max);
    }
}
