//! Core Whitted-style ray tracer.
//!
//! Implements:
//! - Recursive ray tracing with a configurable bounce budget
//! - Phong illumination (ambient + diffuse + specular) with hard shadows
//! - Energy-conserving mirror reflection
//! - Sigmoidal tone mapping followed by gamma encoding

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use prism_math::{ColorRgb, Ray, Vector3, VectorExt};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::error::{ConfigError, ConfigResult};
use crate::{Camera, ImageBuffer, Scene, Surface};

/// Sigmoidal tone curve and display gamma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMap {
    /// Controls brightness (`a`)
    pub brightness: f64,
    /// Controls contrast (`b`)
    pub contrast: f64,
    /// Display gamma
    pub gamma: f64,
}

impl Default for ToneMap {
    fn default() -> Self {
        Self {
            brightness: 2.0,
            contrast: 1.3,
            gamma: 2.2,
        }
    }
}

impl ToneMap {
    /// Map linear radiance to display-encoded [0, 1].
    ///
    /// `p = linear^b`, `display = p / (p + (0.5 / a)^b)`, then `display^(1 / gamma)`.
    ///
    /// Evaluated as `1 / (1 + knee / p)` so an overflowing `p` saturates to 1.
    pub fn apply(&self, linear: ColorRgb) -> ColorRgb {
        let p = linear.power(self.contrast);
        let knee = (0.5 / self.brightness).powf(self.contrast);
        let display = (p.inv() * knee + 1.0).inv();
        display.power(1.0 / self.gamma)
    }

    fn validate(&self) -> ConfigResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.brightness) {
            return Err(ConfigError::InvalidToneMap("brightness"));
        }
        if !positive(self.contrast) {
            return Err(ConfigError::InvalidToneMap("contrast"));
        }
        if !positive(self.gamma) {
            return Err(ConfigError::InvalidToneMap("gamma"));
        }
        Ok(())
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Horizontal field of view in degrees
    pub field_of_view: f64,
    /// Maximum number of reflection bounces
    pub max_bounces: u32,
    /// Color returned when a ray hits nothing
    pub background: ColorRgb,
    /// Offset applied to shadow and reflection ray origins
    pub epsilon: f64,
    /// Bucket edge length for parallel rendering
    pub bucket_size: u32,
    pub tone_map: ToneMap,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            field_of_view: Camera::DEFAULT_FIELD_OF_VIEW,
            max_bounces: 3,
            background: ColorRgb::splat(0.001),
            epsilon: 1e-4,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
            tone_map: ToneMap::default(),
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the bounce budget.
    pub fn with_max_bounces(mut self, max_bounces: u32) -> Self {
        self.max_bounces = max_bounces;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: ColorRgb) -> Self {
        self.background = color;
        self
    }

    /// Check every setting without building anything.
    pub fn validate(&self) -> ConfigResult<()> {
        Camera::new(self.width, self.height, self.field_of_view)?;
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        if self.bucket_size == 0 {
            return Err(ConfigError::InvalidBucketSize(self.bucket_size));
        }
        self.tone_map.validate()
    }
}

/// Ray tracer bound to one validated configuration.
///
/// Holds no per-render state; every trace call is independent, so one
/// renderer can be shared by all render threads.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    camera: Camera,
}

impl Renderer {
    /// Validate `config` and set up the camera.
    pub fn new(config: RenderConfig) -> ConfigResult<Self> {
        config.validate()?;
        let camera = Camera::new(config.width, config.height, config.field_of_view)?;
        Ok(Self { config, camera })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Compute the linear color seen along `ray`.
    ///
    /// Recurses on the mirror direction while `bounces_left > 0` and the
    /// surface is reflective, blending `direct * (1 - k) + reflected * k`.
    pub fn trace(&self, scene: &Scene, ray: &Ray, bounces_left: u32) -> ColorRgb {
        let hit = scene.nearest_intersection(ray);
        let Some(surface) = hit.surface else {
            return self.config.background;
        };

        let direct = self.illuminate(scene, surface, hit.location, hit.normal, ray.origin());

        let reflectivity = surface.reflectivity();
        if bounces_left == 0 || reflectivity == 0.0 {
            return direct;
        }

        let reflected_dir = -ray.direction().reflect_in(hit.normal);
        let reflected_ray = Ray::new(
            hit.location + reflected_dir * self.config.epsilon,
            reflected_dir,
        );
        let reflected = self.trace(scene, &reflected_ray, bounces_left - 1);

        direct * (1.0 - reflectivity) + reflected * reflectivity
    }

    /// Phong illumination of `surface` at `point`, seen from `ray_origin`.
    ///
    /// Every light contributes unless a surface lies between it and `point`;
    /// an occluded light only drops its own diffuse and specular terms.
    pub fn illuminate(
        &self,
        scene: &Scene,
        surface: &dyn Surface,
        point: Vector3,
        normal: Vector3,
        ray_origin: Vector3,
    ) -> ColorRgb {
        let material = surface.material();
        let mut color = material.color * scene.ambient();

        let view = (ray_origin - point).normalize();

        for light in scene.lights() {
            let to_light = light.position() - point;
            let distance = to_light.magnitude();
            let l = to_light.normalize();

            let shadow_ray = Ray::new(point + l * self.config.epsilon, l);
            if scene.nearest_intersection(&shadow_ray).distance < distance {
                continue;
            }

            let illumination = light.illumination_at(distance);
            let r = l.reflect_in(normal).normalize();

            let diffuse = material.color * material.kd * illumination * normal.dot(l).max(0.0);
            let specular = light.color()
                * material.ks
                * illumination
                * r.dot(view).max(0.0).powf(material.alpha);

            color += diffuse + specular;
        }

        color
    }

    /// Tone map a linear color with the configured curve.
    pub fn tonemap(&self, linear: ColorRgb) -> ColorRgb {
        self.config.tone_map.apply(linear)
    }

    /// Trace, tone map and pack one pixel.
    pub fn render_pixel(&self, scene: &Scene, x: u32, y: u32) -> u32 {
        let ray = self.camera.cast_ray(x, y);
        let linear = self.trace(scene, &ray, self.config.max_bounces);
        self.tonemap(linear).to_display_int()
    }

    /// Render the entire scene to an image buffer.
    pub fn render(&self, scene: &Scene) -> ImageBuffer {
        self.render_with_progress(scene, |_| {})
    }

    /// Render the entire scene, reporting completion in [0, 1].
    ///
    /// Buckets are rendered in parallel; `progress` may be called from any
    /// render thread and never affects pixel values.
    pub fn render_with_progress<F>(&self, scene: &Scene, progress: F) -> ImageBuffer
    where
        F: Fn(f64) + Sync,
    {
        let (width, height) = (self.config.width, self.config.height);
        let buckets = generate_buckets(width, height, self.config.bucket_size);
        let total = width as u64 * height as u64;
        let done = AtomicU64::new(0);

        log::info!(
            "Rendering {}x{} in {} buckets, {} bounces",
            width,
            height,
            buckets.len(),
            self.config.max_bounces
        );
        let start = Instant::now();

        let results: Vec<BucketResult> = buckets
            .par_iter()
            .map(|bucket| {
                let result = render_bucket(*bucket, self, scene);
                let count = bucket.area() as u64;
                let finished = done.fetch_add(count, Ordering::Relaxed) + count;
                log::debug!("Bucket {} done ({}/{} pixels)", bucket.index, finished, total);
                progress(finished as f64 / total as f64);
                result
            })
            .collect();

        let mut image = ImageBuffer::new(width, height);
        for result in &results {
            image.write_bucket(result);
        }

        log::info!("Rendered in {:.2?}", start.elapsed());
        image
    }
}
