//! Image tiling for parallel rendering.
//!
//! The frame is cut into square buckets, clipped at the right and bottom
//! edges. Buckets never overlap, so each one can be traced on its own
//! thread and copied into the output afterwards.

use crate::{Renderer, Scene};

/// Default bucket edge length in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// A rectangular block of pixels, `x`/`y` being its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in row-major bucket order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Image coordinates covered by the bucket, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
        let Bucket { x, y, width, height, .. } = *self;
        (y..y + height).flat_map(move |py| (x..x + width).map(move |px| (px, py)))
    }
}

/// Tile a `width` x `height` image, row-major from the top-left.
///
/// `bucket_size` must be non-zero; `RenderConfig::validate` enforces it.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let step = bucket_size as usize;
    (0..height)
        .step_by(step)
        .flat_map(|y| (0..width).step_by(step).map(move |x| (x, y)))
        .enumerate()
        .map(|(index, (x, y))| {
            Bucket::new(
                x,
                y,
                bucket_size.min(width - x),
                bucket_size.min(height - y),
                index,
            )
        })
        .collect()
}

/// Packed pixels for one bucket, row-major within the bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    pub pixels: Vec<u32>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<u32>) -> Self {
        Self { bucket, pixels }
    }
}

/// Trace every pixel of `bucket`.
pub fn render_bucket(bucket: Bucket, renderer: &Renderer, scene: &Scene) -> BucketResult {
    let pixels = bucket
        .pixels()
        .map(|(x, y)| renderer.render_pixel(scene, x, y))
        .collect();
    BucketResult::new(bucket, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PointLight, RenderConfig, Sphere};
    use prism_math::{ColorRgb, Vector3};

    #[test]
    fn test_buckets_cover_each_pixel_once() {
        let (width, height) = (37, 23);
        let mut covered = vec![0u8; (width * height) as usize];
        for bucket in generate_buckets(width, height, 8) {
            for (x, y) in bucket.pixels() {
                covered[(y * width + x) as usize] += 1;
            }
        }
        assert!(covered.iter().all(|&c| c == 1));
    }

    #[test]
    fn test_edge_buckets_are_clipped() {
        // 100 = 64 + 36 in both directions
        let buckets = generate_buckets(100, 100, 64);

        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0], Bucket::new(0, 0, 64, 64, 0));
        assert_eq!(buckets[1], Bucket::new(64, 0, 36, 64, 1));
        assert_eq!(buckets[2], Bucket::new(0, 64, 64, 36, 2));
        assert_eq!(buckets[3], Bucket::new(64, 64, 36, 36, 3));
        assert_eq!(buckets.iter().map(Bucket::area).sum::<u32>(), 100 * 100);
    }

    #[test]
    fn test_bucket_larger_than_image() {
        let buckets = generate_buckets(1, 1, DEFAULT_BUCKET_SIZE);
        assert_eq!(buckets, vec![Bucket::new(0, 0, 1, 1, 0)]);
    }

    #[test]
    fn test_pixels_row_major() {
        let bucket = Bucket::new(3, 5, 2, 2, 0);
        let pixels: Vec<_> = bucket.pixels().collect();
        assert_eq!(pixels, vec![(3, 5), (4, 5), (3, 6), (4, 6)]);
    }

    #[test]
    fn test_render_bucket_matches_render_pixel() {
        let renderer = Renderer::new(RenderConfig::default().with_resolution(16, 12)).unwrap();
        let mut scene = Scene::new(ColorRgb::splat(0.1));
        scene.add(Box::new(Sphere::new(Vector3::new(0.0, 0.0, 4.0), 1.0, ColorRgb::WHITE)));
        scene.add_light(PointLight::new(Vector3::new(2.0, 2.0, 0.0), ColorRgb::WHITE, 100.0));

        let bucket = Bucket::new(4, 2, 5, 3, 0);
        let result = render_bucket(bucket, &renderer, &scene);

        assert_eq!(result.pixels.len(), 15);
        for ((x, y), packed) in bucket.pixels().zip(&result.pixels) {
            assert_eq!(*packed, renderer.render_pixel(&scene, x, y));
        }
    }
}
