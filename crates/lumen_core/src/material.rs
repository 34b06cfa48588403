//! Surface materials.
//!
//! Materials form a closed set dispatched by `match`; every variant is a
//! pure function of the hit, the light direction and the view direction.

use crate::brdf;
use crate::{Color, HitRecord};
use lumen_math::{approx_eq, Vec3};
use thiserror::Error;

/// Index into a scene's material table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct MaterialId(pub usize);

/// Errors raised when constructing a material with invalid parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    #[error("roughness must be strictly positive, got {0}")]
    NonPositiveRoughness(f32),
}

/// A constant colour, ignoring lighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    pub color: Color,
}

/// Normalized Lambert diffuse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambert {
    pub diffuse_color: Color,
    /// kd
    pub diffuse_reflectance: f32,
}

/// Lambert diffuse plus a Phong specular lobe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertPhong {
    pub diffuse_color: Color,
    /// kd
    pub diffuse_reflectance: f32,
    /// ks
    pub specular_reflectance: f32,
    pub phong_exponent: f32,
}

/// Cook-Torrance microfacet BRDF (GGX distribution, Smith geometry,
/// Schlick Fresnel) over a Lambert base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CookTorrence {
    albedo: Color,
    metalness: f32,
    roughness: f32,
}

impl CookTorrence {
    /// Create a Cook-Torrance material.
    ///
    /// Fails if `roughness` is not strictly positive, since the GGX term
    /// divides by it.
    pub fn new(albedo: Color, metalness: f32, roughness: f32) -> Result<Self, MaterialError> {
        // Written as a negation so NaN is rejected too.
        if !(roughness > 0.0) {
            return Err(MaterialError::NonPositiveRoughness(roughness));
        }
        Ok(Self {
            albedo,
            metalness,
            roughness,
        })
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn metalness(&self) -> f32 {
        self.metalness
    }

    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    fn is_dielectric(&self) -> bool {
        approx_eq(self.metalness, 0.0)
    }

    fn shade(&self, n: Vec3, l: Vec3, view_dir: Vec3) -> Color {
        let v = -view_dir;
        let h = (l + v).normalize_or_zero();

        let f0 = if self.is_dielectric() {
            Color::splat(0.04)
        } else {
            self.albedo
        };

        let fresnel = brdf::fresnel_schlick(h, v, f0);
        let d = brdf::normal_distribution_ggx(n, h, self.roughness);
        let g = brdf::geometry_smith(n, v, l, self.roughness);

        let denominator = 4.0 * v.dot(n) * l.dot(n);
        let specular = if denominator > 0.0 {
            fresnel * d * g / denominator
        } else {
            Color::ZERO
        };

        let kd = if self.is_dielectric() {
            Color::ONE - fresnel
        } else {
            Color::ZERO
        };

        brdf::lambert_tinted(kd, self.albedo) + specular
    }
}

/// A surface material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    SolidColor(SolidColor),
    Lambert(Lambert),
    LambertPhong(LambertPhong),
    CookTorrence(CookTorrence),
}

impl Material {
    pub fn solid_color(color: Color) -> Self {
        Material::SolidColor(SolidColor { color })
    }

    pub fn lambert(diffuse_color: Color, diffuse_reflectance: f32) -> Self {
        Material::Lambert(Lambert {
            diffuse_color,
            diffuse_reflectance,
        })
    }

    pub fn lambert_phong(
        diffuse_color: Color,
        diffuse_reflectance: f32,
        specular_reflectance: f32,
        phong_exponent: f32,
    ) -> Self {
        Material::LambertPhong(LambertPhong {
            diffuse_color,
            diffuse_reflectance,
            specular_reflectance,
            phong_exponent,
        })
    }

    pub fn cook_torrence(
        albedo: Color,
        metalness: f32,
        roughness: f32,
    ) -> Result<Self, MaterialError> {
        CookTorrence::new(albedo, metalness, roughness).map(Material::CookTorrence)
    }

    /// Evaluate the BRDF.
    ///
    /// - `l`: unit direction from the hit point towards the light
    /// - `view_dir`: unit direction of the incoming view ray (camera to hit)
    pub fn shade(&self, hit: &HitRecord, l: Vec3, view_dir: Vec3) -> Color {
        match self {
            Material::SolidColor(m) => m.color,
            Material::Lambert(m) => brdf::lambert(m.diffuse_reflectance, m.diffuse_color),
            Material::LambertPhong(m) => {
                brdf::lambert(m.diffuse_reflectance, m.diffuse_color)
                    + brdf::phong(
                        m.specular_reflectance,
                        m.phong_exponent,
                        l,
                        -view_dir,
                        hit.normal,
                    )
            }
            Material::CookTorrence(m) => m.shade(hit.normal, l, view_dir),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::solid_color(crate::colors::RED)
    }
}
