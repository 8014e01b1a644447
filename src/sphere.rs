//! Sphere primitive for ray casting.
//!
//! Solves the full quadratic `k1 t^2 + k2 t + k3 = 0` for the ray parameter.
//! Both roots are returned unfiltered; choosing among them is the resolver's
//! job (see [`crate::hittable`]).

use glam::Vec3A;
use crate::ray::Ray;
use crate::material::Material;

/// Sphere primitive defined by center, radius, and material.
///
/// The radius must be positive. It is validated when a scene is loaded, never
/// during intersection.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere.
    pub radius: f32,

    /// Color and specular exponent.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        Self { center, radius, material }
    }

    /// Intersect a ray with this sphere.
    ///
    /// Returns `[t1, t2]` with `t1 = (-k2 + sqrt(disc)) / 2k1` and
    /// `t2 = (-k2 - sqrt(disc)) / 2k1`, in that order, or `None` when the
    /// discriminant is negative. Roots may lie behind the origin.
    ///
    /// The ray direction must be nonzero so that `k1 > 0`.
    pub fn intersect(&self, r: &Ray) -> Option<[f32; 2]> {
        let oc = r.origin - self.center;

        let k1 = r.direction.dot(r.direction);
        let k2 = 2.0 * oc.dot(r.direction);
        let k3 = oc.dot(oc) - self.radius * self.radius;

        let discriminant = k2 * k2 - 4.0 * k1 * k3;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        Some([(-k2 + sqrtd) / (2.0 * k1), (-k2 - sqrtd) / (2.0 * k1)])
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, p: Vec3A) -> Vec3A {
        let n = p - self.center;
        n / n.length()
    }
}
