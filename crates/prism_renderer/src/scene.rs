//! The renderable world.

use prism_core::{SceneDescription, SurfaceDescription};
use prism_math::{ColorRgb, Ray};

use crate::{PointLight, RaycastHit, Sphere, Surface};

/// Surfaces, point lights and the ambient term.
///
/// Built once, then only read while rendering. `Surface` is `Send + Sync`,
/// so a `&Scene` can be shared across render threads.
pub struct Scene {
    surfaces: Vec<Box<dyn Surface>>,
    lights: Vec<PointLight>,
    ambient: ColorRgb,
}

impl Scene {
    /// Create an empty scene with the given ambient light.
    pub fn new(ambient: ColorRgb) -> Self {
        Self {
            surfaces: Vec::new(),
            lights: Vec::new(),
            ambient,
        }
    }

    /// Build renderable surfaces and lights from a loaded description.
    pub fn from_description(description: &SceneDescription) -> Self {
        let mut scene = Self::new(description.ambient);

        for surface in &description.surfaces {
            match *surface {
                SurfaceDescription::Sphere { center, radius, .. } => {
                    scene.add(Box::new(Sphere::with_material(
                        center,
                        radius,
                        surface.material(),
                    )));
                }
            }
        }

        for light in &description.lights {
            scene.add_light(PointLight::new(light.position, light.color, light.intensity));
        }

        log::debug!(
            "Built scene '{}': {} surfaces, {} lights",
            description.name,
            scene.surfaces.len(),
            scene.lights.len()
        );

        scene
    }

    /// Add a surface to the scene.
    pub fn add(&mut self, surface: Box<dyn Surface>) {
        self.surfaces.push(surface);
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn ambient(&self) -> ColorRgb {
        self.ambient
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the scene has no surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Nearest hit along `ray` over every surface (linear scan).
    ///
    /// Returns [`RaycastHit::miss`] when nothing is hit. On equal distances
    /// the earlier surface wins.
    pub fn nearest_intersection(&self, ray: &Ray) -> RaycastHit<'_> {
        let mut closest = RaycastHit::miss();

        for surface in &self.surfaces {
            let hit = surface.intersect(ray);
            if hit.distance < closest.distance {
                closest = hit;
            }
        }

        closest
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(ColorRgb::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::Material;
    use prism_math::Vector3;

    fn two_sphere_scene() -> Scene {
        let mut scene = Scene::default();
        scene.add(Box::new(Sphere::new(
            Vector3::new(0.0, 0.0, 10.0),
            1.0,
            ColorRgb::new(0.0, 0.0, 1.0),
        )));
        scene.add(Box::new(Sphere::new(
            Vector3::new(0.0, 0.0, 5.0),
            1.0,
            ColorRgb::new(1.0, 0.0, 0.0),
        )));
        scene
    }

    #[test]
    fn test_nearest_wins_regardless_of_order() {
        let scene = two_sphere_scene();
        let hit = scene.nearest_intersection(&Ray::new(Vector3::ZERO, Vector3::Z));

        assert!(hit.is_hit());
        assert!((hit.distance - 4.0).abs() < 1e-9);
        assert_eq!(hit.surface.unwrap().color(), ColorRgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_nearest_matches_individual_surfaces() {
        let scene = two_sphere_scene();
        let ray = Ray::new(Vector3::new(0.0, 0.3, 0.0), Vector3::new(0.0, 0.0, 1.0));

        let best = scene
            .surfaces
            .iter()
            .map(|s| s.intersect(&ray).distance)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(scene.nearest_intersection(&ray).distance, best);
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::default();
        let hit = scene.nearest_intersection(&Ray::new(Vector3::ZERO, Vector3::Z));
        assert!(!hit.is_hit());
        assert!(scene.is_empty());
    }

    #[test]
    fn test_from_description() {
        let mut description = SceneDescription::new("desc").with_ambient(ColorRgb::splat(0.2));
        let material = Material::new(ColorRgb::WHITE, 0.4, 0.5, 3.0, 0.0);
        description.add_surface(SurfaceDescription::sphere_with_material(
            Vector3::new(0.0, 0.0, 4.0),
            1.0,
            material,
        ));
        description.add_light(Vector3::new(1.0, 2.0, 3.0), ColorRgb::WHITE, 10.0);

        let scene = Scene::from_description(&description);
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.lights()[0].intensity(), 10.0);
        assert_eq!(scene.ambient(), ColorRgb::splat(0.2));

        let hit = scene.nearest_intersection(&Ray::new(Vector3::ZERO, Vector3::Z));
        assert_eq!(*hit.surface.unwrap().material(), material);
    }
}
