//! Whole-scene ray queries.

use crate::hittable::{CulledHittable, Hittable};
use lumen_core::{HitRecord, Scene};
use lumen_math::Ray;

/// Ray queries against every primitive in a scene.
pub trait SceneQuery {
    /// Closest hit over spheres, then planes, then meshes.
    ///
    /// On an exact tie in `t` the primitive tested first wins.
    fn closest_hit(&self, ray: &Ray) -> Option<HitRecord>;

    /// Whether anything blocks `ray`, stopping at the first hit.
    ///
    /// Meshes are tested with their cull mode inverted, since shadow rays
    /// leave a surface towards the light rather than arriving from the camera.
    fn does_hit(&self, ray: &Ray) -> bool;
}

impl SceneQuery for Scene {
    fn closest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        let spheres = self.spheres().iter().map(|s| s.hit(ray));
        let planes = self.planes().iter().map(|p| p.hit(ray));
        let meshes = self.meshes().iter().map(|m| m.hit(ray));

        spheres.chain(planes).chain(meshes).fold(None, HitRecord::closer)
    }

    fn does_hit(&self, ray: &Ray) -> bool {
        self.spheres().iter().any(|s| s.does_hit(ray))
            || self.planes().iter().any(|p| p.does_hit(ray))
            || self
                .meshes()
                .iter()
                .any(|m| m.does_hit_culled(ray, m.cull_mode.inverted()))
    }
}
