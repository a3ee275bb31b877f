//! Prism math - vector and colour algebra for the ray tracer.
//!
//! Vectors are `glam::DVec3` (aliased as [`Vector3`]); the few operations
//! glam does not provide live on [`VectorExt`]. Colours are a separate
//! [`ColorRgb`] type so radiance never mixes with positions by accident.

// Re-export glam for convenience
pub use glam::*;

mod color;
mod ray;
mod vector;

pub use color::{ColorParseError, ColorRgb};
pub use ray::Ray;
pub use vector::{Vector3, VectorExt};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_scalar_operations() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a + 1.0, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a * Vector3::new(2.0, 0.5, 1.0), Vector3::new(2.0, 1.0, 3.0));
    }
}
