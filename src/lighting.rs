//! Illumination model: ambient, diffuse (Lambert) and specular (Phong) terms
//! with optional hard shadows.
//!
//! Which terms are evaluated is controlled by an explicit [`RenderConfig`]
//! that is fixed for the duration of a frame.

use clap::ValueEnum;
use glam::Vec3A;
use crate::hittable::Hittable;
use crate::ray::Ray;
use crate::scene::Scene;

/// Independent switches for the illumination terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Evaluate lights at all. When off every surface is drawn at full albedo.
    pub lighting: bool,
    /// Add Phong highlights for materials that have a specular exponent.
    pub specular: bool,
    /// Skip lights blocked by other geometry.
    pub shadows: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderMode::Shadows.into()
    }
}

/// Render-quality presets, from flat colors to fully shadowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Unlit base colors.
    Flat,
    /// Ambient and diffuse lighting.
    Diffuse,
    /// Ambient, diffuse and specular lighting.
    Specular,
    /// Everything, including shadows.
    Shadows,
}

impl RenderMode {
    /// All presets in increasing quality order.
    pub const ALL: [RenderMode; 4] = [
        RenderMode::Flat,
        RenderMode::Diffuse,
        RenderMode::Specular,
        RenderMode::Shadows,
    ];
}

impl From<RenderMode> for RenderConfig {
    fn from(mode: RenderMode) -> Self {
        match mode {
            RenderMode::Flat => RenderConfig { lighting: false, specular: false, shadows: false },
            RenderMode::Diffuse => RenderConfig { lighting: true, specular: false, shadows: false },
            RenderMode::Specular => RenderConfig { lighting: true, specular: true, shadows: false },
            RenderMode::Shadows => RenderConfig { lighting: true, specular: true, shadows: true },
        }
    }
}

/// Total light intensity arriving at `point`.
///
/// `normal` must point out of the surface and `view` from the surface back
/// towards the eye; neither needs to be unit length. `specular` is the struck
/// material's exponent. The result is not clamped.
pub fn compute_lighting(
    scene: &Scene,
    config: &RenderConfig,
    point: Vec3A,
    normal: Vec3A,
    view: Vec3A,
    specular: Option<f32>,
) -> f32 {
    if !config.lighting {
        return 1.0;
    }

    let length_normal = normal.length();
    let length_view = view.length();
    let mut intensity = 0.0;

    for light in &scene.lights {
        let Some(light_dir) = light.direction_from(point) else {
            intensity += light.intensity;
            continue;
        };

        if config.shadows {
            let shadow_ray = Ray::new(point, light_dir);
            if scene.spheres.hit(&shadow_ray, light.shadow_window()).is_some() {
                continue;
            }
        }

        // Diffuse
        let n_dot_l = normal.dot(light_dir);
        if n_dot_l > 0.0 {
            intensity += light.intensity * n_dot_l / (length_normal * light_dir.length());
        }

        // Specular
        if let Some(exponent) = specular.filter(|_| config.specular) {
            let reflection = 2.0 * n_dot_l * normal - light_dir;
            let r_dot_v = reflection.dot(view);
            if r_dot_v > 0.0 {
                intensity += light.intensity * (r_dot_v / (reflection.length() * length_view)).powf(exponent);
            }
        }
    }

    intensity
}
