//! Simple ray tracer example.
//!
//! Renders a small scene of spheres and saves to PPM format.

use prism_core::Material;
use prism_renderer::{ColorRgb, PointLight, RenderConfig, Renderer, Scene, Sphere, Vector3};
use std::fs::File;
use std::io::BufWriter;

fn main() {
    println!("Prism Ray Tracer - Simple Example");
    println!("=================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig::default()
        .with_resolution(640, 480)
        .with_max_bounces(4);
    let renderer = Renderer::new(config).expect("Invalid render config");

    println!(
        "Rendering {}x{} with {} bounces...",
        renderer.config().width,
        renderer.config().height,
        renderer.config().max_bounces
    );

    let start = std::time::Instant::now();
    let image = renderer.render(&scene);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    let file = File::create(filename).expect("Failed to create output file");
    image
        .write_ppm(BufWriter::new(file))
        .expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(ColorRgb::splat(0.02));

    // Ground
    scene.add(Box::new(Sphere::with_material(
        Vector3::new(0.0, -1001.0, 8.0),
        1000.0,
        Material::new(ColorRgb::splat(0.6), 0.9, 0.2, 4.0, 0.1),
    )));

    // Mirror in the middle
    scene.add(Box::new(Sphere::with_material(
        Vector3::new(0.0, 0.0, 8.0),
        1.0,
        Material::new(ColorRgb::splat(0.9), 0.2, 1.5, 50.0, 0.85),
    )));

    // A ring of default spheres
    for i in 0..6 {
        let angle = i as f64 * std::f64::consts::TAU / 6.0;
        let center = Vector3::new(3.0 * angle.cos(), -0.5, 8.0 + 3.0 * angle.sin());
        let color = ColorRgb::new(
            0.5 + 0.5 * angle.cos(),
            0.5 + 0.5 * (angle + 2.0).cos(),
            0.5 + 0.5 * (angle + 4.0).cos(),
        );
        scene.add(Box::new(Sphere::new(center, 0.5, color)));
    }

    scene.add_light(PointLight::new(Vector3::new(-4.0, 6.0, 2.0), ColorRgb::WHITE, 900.0));
    scene.add_light(PointLight::new(
        Vector3::new(5.0, 3.0, 6.0),
        ColorRgb::new(1.0, 0.85, 0.7),
        300.0,
    ));

    println!("Created {} surfaces", scene.len());
    scene
}
