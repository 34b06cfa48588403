//! Ray-primitive intersection.
//!
//! Every test is a pure function of the primitive and the ray. A miss,
//! including any degenerate configuration, is reported as `None`.

use lumen_core::{CullMode, HitRecord, Plane, Sphere, Triangle, TriangleMesh};
use lumen_math::Ray;

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Closest intersection of `ray` with this object, if any.
    fn hit(&self, ray: &Ray) -> Option<HitRecord>;

    /// Visibility-only test. Makes the same accept/reject decision as
    /// [`hit`](Self::hit) without building the record.
    fn does_hit(&self, ray: &Ray) -> bool {
        self.hit(ray).is_some()
    }
}

/// Intersection against a mesh under an explicit cull mode.
///
/// Shadow queries use the inverse of the mesh's own cull mode.
pub trait CulledHittable {
    fn hit_culled(&self, ray: &Ray, cull_mode: CullMode) -> Option<HitRecord>;
    fn does_hit_culled(&self, ray: &Ray, cull_mode: CullMode) -> bool;
}

/// Ray parameter of the sphere hit along the normalized direction.
fn sphere_t(sphere: &Sphere, ray: &Ray) -> Option<f32> {
    let direction = ray.direction.normalize_or_zero();
    let to_center = sphere.origin - ray.origin;

    let tca = to_center.dot(direction);
    let offset_sq = to_center.reject_from_normalized(direction).length_squared();
    let radius_sq = sphere.radius * sphere.radius;
    if offset_sq > radius_sq {
        return None;
    }

    let thc = (radius_sq - offset_sq).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;
    let t = if t0 < t1 && t0 > 0.0 { t0 } else { t1 };

    // Exclusive on both ends
    (t > ray.min && t < ray.max).then_some(t)
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let t = sphere_t(self, ray)?;
        let origin = ray.origin + ray.direction.normalize_or_zero() * t;
        Some(HitRecord {
            origin,
            normal: (origin - self.origin).normalize_or_zero(),
            t,
            material: self.material,
        })
    }

    fn does_hit(&self, ray: &Ray) -> bool {
        sphere_t(self, ray).is_some()
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let normal = self.normal.normalize_or_zero();
        // A parallel ray divides by zero; the non-finite t fails the range check.
        let t = (self.origin - ray.origin).dot(normal) / ray.direction.dot(normal);

        // Inclusive on both ends
        if t >= ray.min && t <= ray.max {
            Some(HitRecord {
                origin: ray.at(t),
                normal,
                t,
                material: self.material,
            })
        } else {
            None
        }
    }
}

/// Möller-Trumbore ray-triangle intersection, after cull filtering.
fn triangle_t(triangle: &Triangle, ray: &Ray) -> Option<f32> {
    if triangle.cull_mode.culls(triangle.normal, ray.direction) {
        return None;
    }

    let edge1 = triangle.v1 - triangle.v0;
    let edge2 = triangle.v2 - triangle.v0;

    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < f32::EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - triangle.v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    if t <= 0.0 || t > ray.max {
        return None;
    }

    Some(t)
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        let t = triangle_t(self, ray)?;
        Some(HitRecord {
            origin: ray.at(t),
            normal: self.normal,
            t,
            material: self.material,
        })
    }

    fn does_hit(&self, ray: &Ray) -> bool {
        triangle_t(self, ray).is_some()
    }
}

impl CulledHittable for TriangleMesh {
    fn hit_culled(&self, ray: &Ray, cull_mode: CullMode) -> Option<HitRecord> {
        if !self.world_bounds().hit(ray) {
            return None;
        }

        (0..self.triangle_count())
            .map(|i| self.triangle_with_cull(i, cull_mode).hit(ray))
            .fold(None, HitRecord::closer)
    }

    fn does_hit_culled(&self, ray: &Ray, cull_mode: CullMode) -> bool {
        self.world_bounds().hit(ray)
            && (0..self.triangle_count())
                .any(|i| self.triangle_with_cull(i, cull_mode).does_hit(ray))
    }
}

impl Hittable for TriangleMesh {
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        self.hit_culled(ray, self.cull_mode)
    }

    fn does_hit(&self, ray: &Ray) -> bool {
        self.does_hit_culled(ray, self.cull_mode)
    }
}
