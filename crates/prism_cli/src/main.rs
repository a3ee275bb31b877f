use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use prism_renderer::{Renderer, Scene};

mod cli;
mod demo;

use cli::Args;

fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let description = match &args.scene {
        Some(path) => prism_core::load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, rendering the built-in demo scene");
            demo::demo_scene()
        }
    };
    let scene = Scene::from_description(&description);

    let renderer =
        Renderer::new(args.render_config()).context("Invalid render configuration")?;
    log::info!(
        "Scene '{}': {} surfaces, {} lights, fov {}",
        description.name,
        scene.len(),
        scene.lights().len(),
        renderer.config().field_of_view
    );

    let last_decile = AtomicU32::new(0);
    let image = renderer.render_with_progress(&scene, |fraction| {
        let decile = (fraction * 10.0) as u32;
        if last_decile.fetch_max(decile, Ordering::Relaxed) < decile {
            log::info!("Progress: {}%", decile * 10);
        }
    });

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
