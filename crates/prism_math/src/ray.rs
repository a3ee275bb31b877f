use crate::Vector3;

/// A half-line in world space: `origin + t * direction` for `t >= 0`.
///
/// The direction is normalized on construction, so `t` along a ray is a
/// world-space distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {
    /// Create a new ray. `direction` must be non-zero.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_direction_is_normalized() {
        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 3.0, 4.0));
        assert!((ray.direction().length() - 1.0).abs() < 1e-12);
        assert!((ray.direction() - Vector3::new(0.0, 0.6, 0.8)).length() < 1e-12);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 2.0));

        assert_eq!(ray.at(0.0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(1.0), Vector3::new(1.0, 0.0, 1.0));
        assert_eq!(ray.at(2.5), Vector3::new(1.0, 0.0, 2.5));
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Vector3::ZERO, Vector3::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin(), ray2.origin());
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
