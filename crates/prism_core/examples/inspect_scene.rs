//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run -p prism_core --example inspect_scene -- scenes/three_spheres.json

use std::env;

use prism_core::{load_scene, SurfaceDescription};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene.json>");
        println!("\nExample:");
        println!("  cargo run -p prism_core --example inspect_scene -- scenes/three_spheres.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!("Ambient: {}", scene.ambient);
            println!("Surfaces: {}", scene.surfaces.len());
            println!("Lights: {}", scene.lights.len());

            println!("\n--- Surfaces ---");
            for (i, surface) in scene.surfaces.iter().enumerate() {
                let material = surface.material();
                match surface {
                    SurfaceDescription::Sphere { center, radius, .. } => println!(
                        "  [{}] sphere at ({:.2}, {:.2}, {:.2}) r={:.2}",
                        i, center.x, center.y, center.z, radius
                    ),
                }
                println!(
                    "       color {} kd={} ks={} alpha={} reflectivity={}",
                    material.color, material.kd, material.ks, material.alpha, material.reflectivity
                );
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                println!(
                    "  [{}] at ({:.2}, {:.2}, {:.2}) color {} intensity {}",
                    i, light.position.x, light.position.y, light.position.z, light.color, light.intensity
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
