//! Sphere primitive for ray tracing.

use crate::surface::{RaycastHit, Surface};
use prism_core::Material;
use prism_math::{ColorRgb, Ray, Vector3};

/// A sphere primitive.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere with the default sphere coefficients.
    pub fn new(center: Vector3, radius: f64, color: ColorRgb) -> Self {
        Self::with_material(center, radius, Material::sphere(color))
    }

    /// Create a new sphere with explicit coefficients.
    ///
    /// `radius` must be positive; the loader rejects anything else.
    pub fn with_material(center: Vector3, radius: f64, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> RaycastHit<'_> {
        // |O + tD - C|^2 = r^2
        let oc = ray.origin() - self.center;
        let d = ray.direction();
        let a = d.dot(d);
        let b = 2.0 * d.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return RaycastHit::miss();
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);

        // Both roots behind the origin
        if t2 < 0.0 {
            return RaycastHit::miss();
        }

        // t1 < 0 <= t2 means the origin is inside the sphere
        let t = if t1 >= 0.0 { t1 } else { t2 };
        let location = ray.at(t);

        RaycastHit {
            distance: t,
            location,
            normal: self.normal_at(location),
            surface: Some(self),
        }
    }

    fn normal_at(&self, point: Vector3) -> Vector3 {
        (point - self.center).normalize()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
