//! Prism Renderer - CPU Whitted-style ray tracing
//!
//! One ray per pixel from a pinhole camera, nearest-hit search over the
//! scene, Phong shading with hard shadows from point lights, and
//! recursive mirror reflection up to a bounce budget. The linear result
//! is tone mapped and packed to 24-bit RGB.

mod bucket;
mod camera;
mod error;
mod light;
mod output;
mod renderer;
mod scene;
mod sphere;
mod surface;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use error::{ConfigError, ConfigResult};
pub use light::PointLight;
pub use output::ImageBuffer;
pub use renderer::{RenderConfig, Renderer, ToneMap};
pub use scene::Scene;
pub use sphere::Sphere;
pub use surface::{RaycastHit, Surface};

/// Re-export the math types the renderer API uses
pub use prism_math::{ColorRgb, Ray, Vector3, VectorExt};
