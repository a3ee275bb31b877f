//! Prism Core - renderer-agnostic scene description.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `SurfaceDescription`,
//!   `LightDescription`, `Material`
//! - **Scene loading**: JSON scene files with validation
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let scene = load_scene("scenes/three_spheres.json")?;
//! println!("Loaded {} surfaces, {} lights",
//!     scene.surfaces.len(),
//!     scene.lights.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{LightDescription, Material, SceneDescription, SurfaceDescription};
