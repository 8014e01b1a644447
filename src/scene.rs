//! Scene description and frame-to-frame animation.

use glam::Vec3A;
use image::Rgba;
use crate::light::{Light, LightKind};
use crate::material::{Color, Material};
use crate::sphere::Sphere;

/// Spheres, lights and background color traced together.
///
/// Order matters only for tie-breaking between equally distant hits.
/// A scene is read-only while a frame is being traced; the host may mutate it
/// between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Geometry, scanned linearly in this order.
    pub spheres: Vec<Sphere>,
    /// Lights, accumulated in this order.
    pub lights: Vec<Light>,
    /// Color of rays that miss every sphere.
    pub background: Color,
}

impl Scene {
    /// Opaque black, the default background.
    pub const BLACK: Color = Rgba([0, 0, 0, 255]);

    /// Empty scene with a black background.
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            background: Self::BLACK,
        }
    }

    /// Three colored spheres resting on a huge yellow ground sphere, lit by an
    /// ambient, a point and a directional light.
    pub fn demo() -> Self {
        Self {
            spheres: vec![
                Sphere::new(Vec3A::new(0.0, 1.0, 3.0), 1.0, Material::shiny(Rgba([255, 0, 0, 255]), 500.0)),
                Sphere::new(Vec3A::new(2.0, 0.0, 4.0), 1.0, Material::shiny(Rgba([0, 255, 0, 255]), 500.0)),
                Sphere::new(Vec3A::new(-2.0, 0.0, 4.0), 1.0, Material::shiny(Rgba([0, 0, 255, 255]), 10.0)),
                Sphere::new(Vec3A::new(0.0, -5001.0, 0.0), 5000.0, Material::shiny(Rgba([255, 255, 0, 255]), 1000.0)),
            ],
            lights: vec![
                Light::ambient(0.2),
                Light::point(Vec3A::new(2.0, 1.0, 0.0), 0.6),
                Light::directional(Vec3A::new(1.0, 4.0, 4.0), 0.2),
            ],
            background: Self::BLACK,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Key-frame driver that bobs the first sphere and orbits the second light.
#[derive(Debug, Clone, Copy, Default)]
pub struct Animation {
    /// Current key frame in degrees, always in `[0, 360)`.
    pub key_frame: f32,
}

impl Animation {
    /// Degrees advanced per frame.
    pub const STEP_DEGREES: f32 = 5.0;
    /// Vertical amplitude of the bobbing sphere.
    pub const BOB_AMPLITUDE: f32 = 0.1;
    /// Radius of the light's orbit in the xz plane.
    pub const ORBIT_RADIUS: f32 = 1.5;

    /// Step to the next key frame and move the scene there.
    ///
    /// Sphere 0 and light 1 are animated when present; light 1 only moves if
    /// it is a point light.
    pub fn advance(&mut self, scene: &mut Scene) {
        self.key_frame += Self::STEP_DEGREES;
        if self.key_frame >= 360.0 {
            self.key_frame = 0.0;
        }
        let angle = self.key_frame.to_radians();

        if let Some(sphere) = scene.spheres.get_mut(0) {
            sphere.center.y = Self::BOB_AMPLITUDE * angle.sin();
        }
        if let Some(Light { kind: LightKind::Point { position }, .. }) = scene.lights.get_mut(1) {
            position.x = Self::ORBIT_RADIUS * angle.cos();
            position.z = Self::ORBIT_RADIUS * angle.sin();
        }
    }
}
