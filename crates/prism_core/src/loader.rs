//! JSON scene loading.
//!
//! A scene file looks like:
//!
//! ```json
//! {
//!   "ambient": 0.05,
//!   "lights": [
//!     { "position": [0, 5, 0], "color": "#ffffff", "intensity": 400 }
//!   ],
//!   "surfaces": [
//!     { "type": "sphere", "center": [0, 0, 3], "radius": 1, "color": [1, 0, 0],
//!       "reflectivity": 0.0 }
//!   ]
//! }
//! ```
//!
//! Colours may be hex strings, `[r, g, b]` arrays or a single number.
//! Unknown keys are rejected, so a misspelled field never silently falls
//! back to its default. Loading validates every value the renderer relies
//! on, so a scene that loads never produces NaNs from bad input.

use std::path::Path;

use thiserror::Error;

use crate::scene::{LightDescription, SceneDescription, SurfaceDescription};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {what}: {reason}")]
    InvalidValue { what: String, reason: String },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene file from disk.
///
/// The scene name defaults to the file stem when the file does not set one.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&text)?;

    if scene.name.is_empty() {
        scene.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    Ok(scene)
}

/// Parse and validate a scene from JSON text.
pub fn load_scene_from_str(text: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(text)?;
    validate(&scene)?;

    if scene.lights.is_empty() {
        log::warn!("Scene has no lights; only ambient shading will be visible");
    }
    if scene.surfaces.is_empty() {
        log::warn!("Scene has no surfaces; every pixel will be background");
    }
    log::info!(
        "Loaded scene '{}': {} surfaces, {} lights",
        scene.name,
        scene.surfaces.len(),
        scene.lights.len()
    );

    Ok(scene)
}

fn validate(scene: &SceneDescription) -> LoadResult<()> {
    if !scene.ambient.is_finite() {
        return Err(invalid("ambient", "must be finite"));
    }
    for (i, light) in scene.lights.iter().enumerate() {
        validate_light(i, light)?;
    }
    for (i, surface) in scene.surfaces.iter().enumerate() {
        validate_surface(i, surface)?;
    }
    Ok(())
}

fn validate_light(index: usize, light: &LightDescription) -> LoadResult<()> {
    let what = format!("light {}", index);
    if !light.position.is_finite() {
        return Err(invalid(&what, "position must be finite"));
    }
    if !light.color.is_finite() {
        return Err(invalid(&what, "color must be finite"));
    }
    if !(light.intensity.is_finite() && light.intensity >= 0.0) {
        return Err(invalid(
            &what,
            format!("intensity must be >= 0, got {}", light.intensity),
        ));
    }
    Ok(())
}

fn validate_surface(index: usize, surface: &SurfaceDescription) -> LoadResult<()> {
    let what = format!("{} {}", surface.kind(), index);
    match *surface {
        SurfaceDescription::Sphere { center, radius, .. } => {
            if !center.is_finite() {
                return Err(invalid(&what, "center must be finite"));
            }
            if !(radius.is_finite() && radius > 0.0) {
                return Err(invalid(&what, format!("radius must be > 0, got {}", radius)));
            }
        }
    }
    surface
        .material()
        .validate()
        .map_err(|field| invalid(&what, format!("{} out of range", field)))
}

fn invalid(what: &str, reason: impl Into<String>) -> LoadError {
    LoadError::InvalidValue {
        what: what.to_string(),
        reason: reason.into(),
    }
}
