//! Nearest-hit resolution.
//!
//! Defines the Hittable trait for geometry that can report the closest
//! intersection inside a parameter window. The same query serves primary
//! visibility and shadow tests, only the window differs.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Closest accepted intersection along a ray.
///
/// Borrows the struck sphere from the scene; the resolver never owns geometry.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Ray parameter of the hit.
    pub t: f32,
    /// Sphere that was hit.
    pub sphere: &'a Sphere,
}

/// Trait for objects that can be intersected by rays.
pub trait Hittable {
    /// Closest hit with `ray_t.min < t < ray_t.max`, or `None`.
    ///
    /// A candidate replaces the running best only if it is strictly smaller,
    /// so among equal distances the first one found wins.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let roots = self.intersect(r)?;

        let mut closest: Option<f32> = None;
        for t in roots {
            if ray_t.with_max(closest.unwrap_or(ray_t.max)).surrounds(t) {
                closest = Some(t);
            }
        }

        closest.map(|t| HitRecord { t, sphere: self })
    }
}

impl Hittable for [Sphere] {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        // Linear scan in scene order
        for sphere in self {
            if let Some(rec) = sphere.hit(r, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
