//! Ray representation for ray casting.
//!
//! A ray is defined as r(t) = origin + t * direction, a half-line used for
//! both primary visibility and shadow queries.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The eye point for primary rays, a surface point for shadow rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Never normalized by the caster: primary directions come straight from
    /// the viewport mapping and shadow directions are the raw vector towards
    /// the light. Must be nonzero.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
