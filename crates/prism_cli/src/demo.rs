//! Built-in scene rendered when no scene file is given.

use prism_core::{Material, SceneDescription, SurfaceDescription};
use prism_math::{ColorRgb, Vector3};

/// Three coloured spheres over a large floor sphere, lit by two point lights.
pub fn demo_scene() -> SceneDescription {
    let mut scene = SceneDescription::new("demo").with_ambient(ColorRgb::splat(0.05));

    scene.add_surface(SurfaceDescription::sphere_with_material(
        Vector3::new(0.0, -1001.0, 10.0),
        1000.0,
        Material::new(ColorRgb::splat(0.7), 0.9, 0.3, 8.0, 0.15),
    ));
    scene.add_surface(SurfaceDescription::sphere(
        Vector3::new(-2.2, 0.0, 10.0),
        1.0,
        ColorRgb::new(0.9, 0.2, 0.15),
    ));
    scene.add_surface(SurfaceDescription::sphere_with_material(
        Vector3::new(0.0, 0.0, 11.0),
        1.0,
        Material::new(ColorRgb::splat(0.95), 0.3, 1.6, 60.0, 0.8),
    ));
    scene.add_surface(SurfaceDescription::sphere(
        Vector3::new(2.2, 0.0, 10.0),
        1.0,
        ColorRgb::new(0.15, 0.35, 0.9),
    ));

    scene.add_light(Vector3::new(-5.0, 8.0, 4.0), ColorRgb::WHITE, 1200.0);
    scene.add_light(Vector3::new(6.0, 4.0, 6.0), ColorRgb::new(1.0, 0.9, 0.75), 400.0);

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_is_valid() {
        let scene = demo_scene();

        assert_eq!(scene.surfaces.len(), 4);
        assert_eq!(scene.lights.len(), 2);
        for surface in &scene.surfaces {
            assert!(surface.material().validate().is_ok());
        }
        assert!(scene.lights.iter().all(|l| l.intensity > 0.0));
    }
}
