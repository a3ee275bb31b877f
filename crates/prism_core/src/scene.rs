//! Scene description types for Prism.
//!
//! This module defines the scene as it appears in a scene file: plain data,
//! validated but not yet turned into renderable surfaces. The renderer
//! builds its own `Scene` from a [`SceneDescription`].

use prism_math::{ColorRgb, Vector3};
use serde::Deserialize;

/// Default sphere diffuse coefficient.
pub const SPHERE_KD: f64 = 0.8;
/// Default sphere specular coefficient.
pub const SPHERE_KS: f64 = 1.2;
/// Default sphere Phong exponent.
pub const SPHERE_ALPHA: f64 = 10.0;
/// Default sphere reflectivity.
pub const SPHERE_REFLECTIVITY: f64 = 0.3;

/// Surface appearance: base colour, Phong coefficients and mirror weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Diffuse colour (linear RGB)
    pub color: ColorRgb,

    /// Diffuse coefficient
    pub kd: f64,

    /// Specular coefficient
    pub ks: f64,

    /// Phong exponent
    pub alpha: f64,

    /// Fraction of the final colour taken from the reflected ray (0..=1)
    pub reflectivity: f64,
}

impl Material {
    pub fn new(color: ColorRgb, kd: f64, ks: f64, alpha: f64, reflectivity: f64) -> Self {
        Self {
            color,
            kd,
            ks,
            alpha,
            reflectivity,
        }
    }

    /// The coefficients a sphere gets when none are given.
    pub fn sphere(color: ColorRgb) -> Self {
        Self::new(color, SPHERE_KD, SPHERE_KS, SPHERE_ALPHA, SPHERE_REFLECTIVITY)
    }

    /// Copy of this material with a different reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Check the coefficient ranges. Returns the name of the first bad field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.color.is_finite() {
            return Err("color");
        }
        if !(self.kd.is_finite() && self.kd >= 0.0) {
            return Err("kd");
        }
        if !(self.ks.is_finite() && self.ks >= 0.0) {
            return Err("ks");
        }
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err("alpha");
        }
        if !(0.0..=1.0).contains(&self.reflectivity) {
            return Err("reflectivity");
        }
        Ok(())
    }
}

/// A point light as written in a scene file.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDescription {
    pub position: Vector3,
    #[serde(default = "white")]
    pub color: ColorRgb,
    pub intensity: f64,
}

/// A renderable shape as written in a scene file.
///
/// Optional Phong fields fall back to the shape's defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum SurfaceDescription {
    Sphere {
        center: Vector3,
        radius: f64,
        #[serde(default = "white")]
        color: ColorRgb,
        #[serde(default)]
        kd: Option<f64>,
        #[serde(default)]
        ks: Option<f64>,
        #[serde(default)]
        alpha: Option<f64>,
        #[serde(default)]
        reflectivity: Option<f64>,
    },
}

impl SurfaceDescription {
    /// A sphere with the default coefficients.
    pub fn sphere(center: Vector3, radius: f64, color: ColorRgb) -> Self {
        Self::Sphere {
            center,
            radius,
            color,
            kd: None,
            ks: None,
            alpha: None,
            reflectivity: None,
        }
    }

    /// A sphere with every coefficient given explicitly.
    pub fn sphere_with_material(center: Vector3, radius: f64, material: Material) -> Self {
        Self::Sphere {
            center,
            radius,
            color: material.color,
            kd: Some(material.kd),
            ks: Some(material.ks),
            alpha: Some(material.alpha),
            reflectivity: Some(material.reflectivity),
        }
    }

    /// Resolve the material, explicit values taking precedence over defaults.
    pub fn material(&self) -> Material {
        match *self {
            Self::Sphere {
                color,
                kd,
                ks,
                alpha,
                reflectivity,
                ..
            } => {
                let defaults = Material::sphere(color);
                Material {
                    color,
                    kd: kd.unwrap_or(defaults.kd),
                    ks: ks.unwrap_or(defaults.ks),
                    alpha: alpha.unwrap_or(defaults.alpha),
                    reflectivity: reflectivity.unwrap_or(defaults.reflectivity),
                }
            }
        }
    }

    /// Short name of the shape kind, for logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
        }
    }
}

/// The complete world: surfaces, point lights and the ambient term.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    /// Scene name (file stem when loaded from disk)
    #[serde(default)]
    pub name: String,

    /// Ambient light colour
    #[serde(default = "white")]
    pub ambient: ColorRgb,

    #[serde(default)]
    pub lights: Vec<LightDescription>,

    #[serde(default)]
    pub surfaces: Vec<SurfaceDescription>,
}

impl SceneDescription {
    /// Create an empty scene with full-strength white ambient light.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ambient: ColorRgb::WHITE,
            lights: Vec::new(),
            surfaces: Vec::new(),
        }
    }

    pub fn with_ambient(mut self, ambient: ColorRgb) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn add_surface(&mut self, surface: SurfaceDescription) {
        self.surfaces.push(surface);
    }

    pub fn add_light(&mut self, position: Vector3, color: ColorRgb, intensity: f64) {
        self.lights.push(LightDescription {
            position,
            color,
            intensity,
        });
    }
}

fn white() -> ColorRgb {
    ColorRgb::WHITE
}
