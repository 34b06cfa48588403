//! Pinhole camera for primary ray generation.

use lumen_math::{Mat4, Ray, Vec3};

/// How close `forward` may get to world up before the basis switches
/// to an alternate up reference.
const UP_SINGULARITY_EPSILON: f32 = 1e-4;

/// A pinhole camera in a left-handed world (+Z forward, +Y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    fov_angle: f32,
    fov_multiplier: f32,
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    camera_to_world: Mat4,
}

impl Camera {
    /// Create a camera at `origin` looking down +Z with a vertical field
    /// of view of `fov_angle` degrees.
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        let mut camera = Self {
            origin,
            fov_angle,
            fov_multiplier: 1.0,
            forward: Vec3::Z,
            up: Vec3::Y,
            right: Vec3::X,
            camera_to_world: Mat4::IDENTITY,
        };
        camera.set_fov_angle(fov_angle);
        camera.calculate_camera_to_world();
        camera
    }

    pub fn set_fov_angle(&mut self, fov_angle: f32) {
        self.fov_angle = fov_angle;
        self.fov_multiplier = (fov_angle.to_radians() / 2.0).tan();
    }

    /// Point the camera along `forward` and rebuild the basis.
    pub fn set_forward(&mut self, forward: Vec3) {
        self.forward = forward.normalize_or_zero();
        self.calculate_camera_to_world();
    }

    /// Point the camera at `target`.
    pub fn look_at(&mut self, target: Vec3) {
        self.set_forward(target - self.origin);
    }

    /// Move the camera and rebuild the basis.
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
        self.calculate_camera_to_world();
    }

    /// Rebuild `right`, `up` and the camera-to-world matrix from `forward`
    /// and `origin`.
    ///
    /// World +Y is the up reference, except when `forward` is within
    /// `1e-4` of +/-Y where the cross product would vanish; there -Z
    /// (looking up) or +Z (looking down) is used instead.
    pub fn calculate_camera_to_world(&mut self) -> Mat4 {
        let up_reference = if self.forward.y > 1.0 - UP_SINGULARITY_EPSILON {
            Vec3::NEG_Z
        } else if self.forward.y < -(1.0 - UP_SINGULARITY_EPSILON) {
            Vec3::Z
        } else {
            Vec3::Y
        };

        self.right = up_reference.cross(self.forward).normalize_or_zero();
        self.up = self.forward.cross(self.right);

        self.camera_to_world = Mat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            self.forward.extend(0.0),
            self.origin.extend(1.0),
        );
        self.camera_to_world
    }

    /// Primary ray through the centre of pixel (`x`, `y`) of a
    /// `width` x `height` image. Pixel (0, 0) is the top-left corner.
    pub fn ray_for_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let aspect_ratio = width as f32 / height as f32;

        let ndc_x = (x as f32 + 0.5) / width as f32;
        let ndc_y = (y as f32 + 0.5) / height as f32;

        let screen_x = 2.0 * ndc_x - 1.0;
        let screen_y = 1.0 - 2.0 * ndc_y;

        let camera_space = Vec3::new(
            screen_x * aspect_ratio * self.fov_multiplier,
            screen_y * self.fov_multiplier,
            1.0,
        );
        let direction = self
            .camera_to_world
            .transform_vector3(camera_space)
            .normalize();

        Ray::new(self.origin, direction)
    }

    pub fn fov_angle(&self) -> f32 {
        self.fov_angle
    }

    pub fn fov_multiplier(&self) -> f32 {
        self.fov_multiplier
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn camera_to_world(&self) -> Mat4 {
        self.camera_to_world
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 90.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_basis() {
        let camera = Camera::default();
        assert_eq!(camera.right(), Vec3::X);
        assert_eq!(camera.up(), Vec3::Y);
        assert_eq!(camera.forward(), Vec3::Z);
        assert!((camera.fov_multiplier() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_center_ray_follows_forward() {
        let mut camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);
        // Odd dimensions put a pixel centre exactly on the axis
        let ray = camera.ray_for_pixel(50, 50, 101, 101);
        assert_eq!(ray.origin, Vec3::new(0.0, 3.0, -9.0));
        assert!((ray.direction - Vec3::Z).length() < 1e-5);

        camera.look_at(Vec3::new(10.0, 3.0, -9.0));
        let ray = camera.ray_for_pixel(50, 50, 101, 101);
        assert!((ray.direction - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_top_left_pixel_points_up_left() {
        let camera = Camera::default();
        let ray = camera.ray_for_pixel(0, 0, 100, 100);
        assert!(ray.direction.x < 0.0);
        assert!(ray.direction.y > 0.0);
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_fov_multiplier() {
        let mut camera = Camera::default();
        camera.set_fov_angle(45.0);
        assert!((camera.fov_multiplier() - 22.5_f32.to_radians().tan()).abs() < 1e-6);
        assert_eq!(camera.fov_angle(), 45.0);
    }

    #[test]
    fn test_looking_straight_up_is_finite() {
        let mut camera = Camera::default();
        camera.set_forward(Vec3::Y);
        assert!(camera.right().is_finite());
        assert!((camera.right().length() - 1.0).abs() < 1e-5);
        assert!((camera.up().length() - 1.0).abs() < 1e-5);

        camera.set_forward(Vec3::NEG_Y);
        assert!((camera.right().length() - 1.0).abs() < 1e-5);
        let ray = camera.ray_for_pixel(0, 0, 4, 4);
        assert!(ray.direction.is_finite());
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let mut camera = Camera::default();
        camera.set_forward(Vec3::new(1.0, 0.5, 2.0));
        let (r, u, f) = (camera.right(), camera.up(), camera.forward());
        assert!(r.dot(u).abs() < 1e-5);
        assert!(r.dot(f).abs() < 1e-5);
        assert!(u.dot(f).abs() < 1e-5);
        assert!((u.length() - 1.0).abs() < 1e-5);
    }
}
