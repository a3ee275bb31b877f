//! Render output.
//!
//! The renderer fills an [`ImageBuffer`] of packed `0xRRGGBB` display
//! colors; this module turns it into files.

use std::io::{self, Write};
use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};
use prism_math::ColorRgb;

use crate::bucket::BucketResult;

/// Row-major grid of packed display colors.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the packed pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }

    /// Set the packed pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, packed: u32) {
        let i = self.index(x, y);
        self.pixels[i] = packed;
    }

    /// Get the pixel at (x, y) as a display color in [0, 1].
    pub fn color(&self, x: u32, y: u32) -> ColorRgb {
        ColorRgb::from_display_int(self.get(x, y))
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        let row_len = bucket.width as usize;
        for (row, chunk) in result.pixels.chunks_exact(row_len).enumerate() {
            let start = self.index(bucket.x, bucket.y + row as u32);
            self.pixels[start..start + row_len].copy_from_slice(chunk);
        }
    }

    /// Convert to an 8-bit RGB image.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let packed = self.get(x, y);
            Rgb([(packed >> 16) as u8, (packed >> 8) as u8, packed as u8])
        })
    }

    /// Save to disk; the format follows the file extension (`.png`, `.ppm`).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let path = path.as_ref();
        self.to_rgb_image().save(path)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// Write as plain-text PPM (P3).
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for &packed in &self.pixels {
            writeln!(
                writer,
                "{} {} {}",
                (packed >> 16) & 0xff,
                (packed >> 8) & 0xff,
                packed & 0xff
            )?;
        }

        writer.flush()
    }
}
