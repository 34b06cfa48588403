//! Analytic BRDF building blocks.
//!
//! Direction conventions: `l` points from the surface towards the light,
//! `v` (where named so) points from the surface towards the viewer, and
//! `n` is the unit surface normal. All inputs are expected normalized.

use crate::Color;
use lumen_math::Vec3;
use std::f32::consts::PI;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Normalized Lambert diffuse term: `kd * cd / pi`.
#[inline]
pub fn lambert(kd: f32, cd: Color) -> Color {
    cd * kd / PI
}

/// Lambert diffuse with a per-channel reflectance.
#[inline]
pub fn lambert_tinted(kd: Color, cd: Color) -> Color {
    cd * kd / PI
}

/// Phong specular lobe.
///
/// `l` points towards the light, `v` towards the viewer.
pub fn phong(ks: f32, exponent: f32, l: Vec3, v: Vec3, n: Vec3) -> Color {
    let r = reflect(-l, n);
    let cos_alpha = r.dot(v).max(0.0);
    Color::splat(ks * cos_alpha.powf(exponent))
}

/// Schlick Fresnel approximation for half vector `h` and view vector `v`.
#[inline]
pub fn fresnel_schlick(h: Vec3, v: Vec3, f0: Color) -> Color {
    let x = (1.0 - h.dot(v)).clamp(0.0, 1.0);
    let x2 = x * x;
    f0 + (Color::ONE - f0) * (x2 * x2 * x) // (1 - cos_theta)^5
}

/// GGX/Trowbridge-Reitz distribution with `alpha = roughness^2`.
#[inline]
pub fn normal_distribution_ggx(n: Vec3, h: Vec3, roughness: f32) -> f32 {
    let alpha = roughness * roughness;
    let a2 = alpha * alpha;
    let n_dot_h = n.dot(h).max(0.0);
    let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom)
}

/// Schlick-GGX single-direction masking term (direct lighting remap of k).
#[inline]
pub fn geometry_schlick_ggx(n: Vec3, v: Vec3, roughness: f32) -> f32 {
    let alpha = roughness * roughness;
    let k = (alpha + 1.0) * (alpha + 1.0) / 8.0;
    let n_dot_v = n.dot(v).max(0.0);
    n_dot_v / (n_dot_v * (1.0 - k) + k)
}

/// Smith shadowing-masking: product of the view and light terms.
#[inline]
pub fn geometry_smith(n: Vec3, v: Vec3, l: Vec3, roughness: f32) -> f32 {
    geometry_schlick_ggx(n, v, roughness) * geometry_schlick_ggx(n, l, roughness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lambert_scales_linearly() {
        let cd = Color::new(1.0, 0.5, 0.25);
        let one = lambert(1.0, cd);
        let half = lambert(0.5, cd);

        assert!((one - cd / PI).length() < 1e-6);
        assert!((half * 2.0 - one).length() < 1e-6);
    }

    #[test]
    fn test_lambert_tinted_matches_scalar() {
        let cd = Color::new(0.3, 0.6, 0.9);
        assert!((lambert_tinted(Color::splat(0.7), cd) - lambert(0.7, cd)).length() < 1e-6);
    }

    #[test]
    fn test_reflect() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_phong_peak_at_mirror_direction() {
        let n = Vec3::Y;
        let l = Vec3::new(1.0, 1.0, 0.0).normalize();
        let mirror = Vec3::new(-1.0, 1.0, 0.0).normalize();

        let peak = phong(0.5, 10.0, l, mirror, n);
        assert!((peak - Color::splat(0.5)).length() < 1e-5);

        // Viewer on the light's side sees (almost) no highlight
        let off = phong(0.5, 10.0, l, l, n);
        assert!(off.x < 1e-5);
    }

    #[test]
    fn test_fresnel_at_normal_incidence_is_f0() {
        let f0 = Color::splat(0.04);
        let f = fresnel_schlick(Vec3::Y, Vec3::Y, f0);
        assert!((f - f0).length() < 1e-6);

        // Grazing angle tends to 1
        let f = fresnel_schlick(Vec3::Y, Vec3::X, f0);
        assert!((f - Color::ONE).length() < 1e-6);
    }

    #[test]
    fn test_ggx_peak() {
        // At n == h the distribution is 1 / (pi * alpha^2)
        let roughness: f32 = 0.5;
        let alpha = roughness * roughness;
        let d = normal_distribution_ggx(Vec3::Y, Vec3::Y, roughness);
        assert!((d - 1.0 / (PI * alpha * alpha)).abs() < 1e-3);
    }

    #[test]
    fn test_geometry_smith_bounds() {
        let n = Vec3::Y;
        let g = geometry_smith(n, n, n, 0.6);
        assert!((g - 1.0).abs() < 1e-5);

        let grazing = Vec3::new(1.0, 0.01, 0.0).normalize();
        let g = geometry_smith(n, grazing, n, 0.6);
        assert!(g > 0.0 && g < 1.0);
    }
}
