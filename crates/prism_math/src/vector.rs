//! Vector algebra.
//!
//! Arithmetic, dot/cross products, magnitude (`length`), `normalize`,
//! elementwise power (`powf`) and elementwise inverse (`recip`) all come
//! straight from glam. Inverse follows IEEE-754: a zero component gives
//! `±inf`, never a panic.

use glam::DVec3;

/// A point, direction or channel triple in world space.
pub type Vector3 = DVec3;

/// Operations the renderer needs that glam does not spell the same way.
pub trait VectorExt {
    /// Reflect `self` in the normal `n`: `n * (2 * (self . n)) - self`.
    ///
    /// The result points away from the surface on the same side as `self`
    /// (it mirrors `self` about `n`). Negate it to bounce an incoming ray.
    fn reflect_in(self, n: Self) -> Self;

    /// Euclidean norm. Same as `length`, named for the shading code.
    fn magnitude(self) -> f64;
}

impl VectorExt for DVec3 {
    #[inline]
    fn reflect_in(self, n: DVec3) -> DVec3 {
        n * (2.0 * self.dot(n)) - self
    }

    #[inline]
    fn magnitude(self) -> f64 {
        self.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_normalize_has_unit_magnitude() {
        let vectors = [
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(-1.0, 2.0, -7.5),
            Vector3::new(1e-6, 0.0, 0.0),
            Vector3::new(1e6, -1e6, 3.0),
        ];
        for v in vectors {
            assert!((v.normalize().magnitude() - 1.0).abs() < EPS, "v = {v:?}");
        }
    }

    #[test]
    fn test_reflect_preserves_normal_component_and_length() {
        let n = Vector3::new(0.0, 1.0, 1.0).normalize();
        let d = Vector3::new(0.3, -2.0, 0.7);
        let r = d.reflect_in(n);

        assert!((r.dot(n) - d.dot(n)).abs() < EPS);
        assert!((r.magnitude() - d.magnitude()).abs() < EPS);
    }

    #[test]
    fn test_reflect_mirrors_about_normal() {
        // Light straight above a floor reflects back along itself
        let up = Vector3::Y;
        assert_eq!(up.reflect_in(up), up);

        // A 45 degree vector flips its tangential component
        let l = Vector3::new(1.0, 1.0, 0.0);
        assert_eq!(l.reflect_in(up), Vector3::new(-1.0, 1.0, 0.0));
    }

    #[test]
    fn test_power_and_inverse() {
        let v = Vector3::new(2.0, 4.0, 0.5);
        assert_eq!(v.powf(2.0), Vector3::new(4.0, 16.0, 0.25));
        assert_eq!(v.recip(), Vector3::new(0.5, 0.25, 2.0));

        let with_zero = Vector3::new(0.0, 1.0, -0.0).recip();
        assert_eq!(with_zero.x, f64::INFINITY);
        assert_eq!(with_zero.z, f64::NEG_INFINITY);
    }

    #[test]
    fn test_cross_product() {
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(Vector3::X), -Vector3::Z);
    }
}
