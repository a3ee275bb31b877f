//! Pinhole camera for ray generation.

use prism_math::{Ray, Vector3};

use crate::error::{ConfigError, ConfigResult};

/// Pinhole camera fixed at the origin, looking down +z.
///
/// The image plane sits at distance 1 along the view axis, `2 tan(fov / 2)`
/// wide and `width / aspect_ratio` tall. Pixel samples are taken at pixel
/// centers; row 0 is the top of the image.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    width_px: u32,
    height_px: u32,
    field_of_view: f64,

    // Derived image plane dimensions (world units)
    plane_width: f64,
    plane_height: f64,
    step_x: f64,
    step_y: f64,
}

impl Camera {
    /// Camera position. Translation is not supported.
    pub const POSITION: Vector3 = Vector3::ZERO;
    /// View direction. Rotation is not supported.
    pub const DIRECTION: Vector3 = Vector3::Z;
    /// Horizontal field of view used when none is configured.
    pub const DEFAULT_FIELD_OF_VIEW: f64 = 45.0;

    /// Create a camera for a `width_px` x `height_px` image.
    ///
    /// `field_of_view` is the horizontal angle in degrees, in (0, 180).
    pub fn new(width_px: u32, height_px: u32, field_of_view: f64) -> ConfigResult<Self> {
        if width_px == 0 || height_px == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: width_px,
                height: height_px,
            });
        }
        if !(field_of_view > 0.0 && field_of_view < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(field_of_view));
        }

        let aspect_ratio = width_px as f64 / height_px as f64;
        let plane_width = 2.0 * (field_of_view.to_radians() / 2.0).tan();
        let plane_height = plane_width / aspect_ratio;

        Ok(Self {
            width_px,
            height_px,
            field_of_view,
            plane_width,
            plane_height,
            step_x: plane_width / width_px as f64,
            step_y: plane_height / height_px as f64,
        })
    }

    /// Generate the primary ray through the center of pixel (x, y).
    pub fn cast_ray(&self, x: u32, y: u32) -> Ray {
        let x_pos = (self.step_x - self.plane_width) / 2.0 + x as f64 * self.step_x;
        let y_pos = (self.plane_height - self.step_y) / 2.0 - y as f64 * self.step_y;
        Ray::new(Self::POSITION, Vector3::new(x_pos, y_pos, 1.0))
    }

    pub fn width(&self) -> u32 {
        self.width_px
    }

    pub fn height(&self) -> u32 {
        self.height_px
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width_px as f64 / self.height_px as f64
    }

    /// Image plane size in world units at distance 1.
    pub fn plane_size(&self) -> (f64, f64) {
        (self.plane_width, self.plane_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_plane_dimensions() {
        let camera = Camera::new(800, 400, 90.0).unwrap();
        let (w, h) = camera.plane_size();

        // tan(45 deg) = 1
        assert!((w - 2.0).abs() < EPS);
        assert!((h - 1.0).abs() < EPS);
        assert_eq!(camera.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_single_pixel_looks_straight_ahead() {
        let camera = Camera::new(1, 1, 45.0).unwrap();
        let ray = camera.cast_ray(0, 0);

        assert_eq!(ray.origin(), Camera::POSITION);
        assert!((ray.direction() - Camera::DIRECTION).length() < EPS);
    }

    #[test]
    fn test_center_pixel_of_odd_image() {
        let camera = Camera::new(101, 51, 60.0).unwrap();
        let ray = camera.cast_ray(50, 25);
        assert!((ray.direction() - Vector3::Z).length() < EPS);
    }

    #[test]
    fn test_corners_are_symmetric() {
        let camera = Camera::new(64, 48, 45.0).unwrap();
        let top_left = camera.cast_ray(0, 0).direction();
        let bottom_right = camera.cast_ray(63, 47).direction();

        // Row 0 is the top of the image, column 0 the left
        assert!(top_left.x < 0.0);
        assert!(top_left.y > 0.0);
        assert!((top_left.x + bottom_right.x).abs() < EPS);
        assert!((top_left.y + bottom_right.y).abs() < EPS);
        assert!((top_left.z - bottom_right.z).abs() < EPS);
    }

    #[test]
    fn test_samples_stay_inside_plane() {
        let camera = Camera::new(10, 10, 90.0).unwrap();
        let d = camera.cast_ray(0, 0).direction();
        // Project back onto the z = 1 plane
        let (x, y) = (d.x / d.z, d.y / d.z);

        // Half a pixel in from the corner (plane is 2x2, pixels are 0.2)
        assert!((x + 0.9).abs() < EPS);
        assert!((y - 0.9).abs() < EPS);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert_eq!(
            Camera::new(0, 10, 45.0).unwrap_err(),
            ConfigError::InvalidDimensions { width: 0, height: 10 }
        );
        assert!(Camera::new(10, 0, 45.0).is_err());
    }

    #[test]
    fn test_rejects_bad_field_of_view() {
        for fov in [0.0, -10.0, 180.0, 270.0, f64::NAN] {
            assert!(
                matches!(Camera::new(10, 10, fov), Err(ConfigError::InvalidFieldOfView(_))),
                "fov {} should be rejected",
                fov
            );
        }
    }
}
