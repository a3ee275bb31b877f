//! Surface trait and RaycastHit for ray-surface intersection.

use prism_core::Material;
use prism_math::{ColorRgb, Ray, Vector3};

/// Result of an intersection query.
///
/// A miss is a sentinel with `distance = +inf` and no surface, so the
/// nearest-hit search can compare distances without special cases.
#[derive(Clone, Copy)]
pub struct RaycastHit<'a> {
    /// Distance along the ray to the hit point (`+inf` on a miss)
    pub distance: f64,
    /// Point of intersection
    pub location: Vector3,
    /// Outward unit normal at `location`
    pub normal: Vector3,
    /// The surface that was hit
    pub surface: Option<&'a dyn Surface>,
}

impl<'a> RaycastHit<'a> {
    /// The no-hit sentinel.
    pub fn miss() -> Self {
        Self {
            distance: f64::INFINITY,
            location: Vector3::ZERO,
            normal: Vector3::ZERO,
            surface: None,
        }
    }

    /// Whether a surface was hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.surface.is_some()
    }
}

impl Default for RaycastHit<'_> {
    fn default() -> Self {
        Self::miss()
    }
}

/// A renderable shape.
///
/// New primitives implement this trait; `Scene` and `Renderer` only ever
/// see `dyn Surface`.
pub trait Surface: Send + Sync {
    /// Intersect `ray` with this surface.
    ///
    /// Returns the nearest hit at a non-negative distance, or
    /// [`RaycastHit::miss`].
    fn intersect(&self, ray: &Ray) -> RaycastHit<'_>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: Vector3) -> Vector3;

    /// Colour, Phong coefficients and reflectivity.
    fn material(&self) -> &Material;

    fn color(&self) -> ColorRgb {
        self.material().color
    }

    fn reflectivity(&self) -> f64 {
        self.material().reflectivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_sentinel() {
        let miss = RaycastHit::miss();
        assert!(!miss.is_hit());
        assert_eq!(miss.distance, f64::INFINITY);
        assert!(RaycastHit::default().surface.is_none());
    }
}
