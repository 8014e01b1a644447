//! Per-pixel tracing: nearest hit, shading, background on miss.

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::lighting::{compute_lighting, RenderConfig};
use crate::material::Color;
use crate::ray::Ray;
use crate::scene::Scene;

/// Color seen along `r` through the window `ray_t`.
///
/// Primary rays use [`Interval::PRIMARY`] so nothing between the eye and the
/// projection plane is drawn.
pub fn trace(scene: &Scene, config: &RenderConfig, r: &Ray, ray_t: Interval) -> Color {
    let Some(rec) = scene.spheres.hit(r, ray_t) else {
        return scene.background;
    };

    let point = r.at(rec.t);
    let normal = rec.sphere.normal_at(point);
    let material = &rec.sphere.material;
    let intensity = compute_lighting(scene, config, point, normal, -r.direction, material.specular);

    material.shade(intensity)
}
