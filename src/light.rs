//! Light sources.

use glam::Vec3A;
use image::Rgba;
use crate::interval::Interval;
use crate::material::Color;

/// The three kinds of light and the geometry each one needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform light reaching every surface point.
    Ambient,
    /// Light emitted from a position in the scene.
    Point {
        /// World position of the light.
        position: Vec3A,
    },
    /// Light arriving from infinity along a fixed vector.
    Directional {
        /// Vector from a surface point towards the light, used as-is.
        direction: Vec3A,
    },
}

/// A light source.
///
/// `color` is carried but does not tint shading; only `intensity` does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Ambient, point or directional.
    pub kind: LightKind,
    /// Contribution weight of this light.
    pub intensity: f32,
    /// Nominal light color.
    pub color: Color,
}

impl Light {
    /// White ambient light.
    pub fn ambient(intensity: f32) -> Self {
        Self::with_kind(LightKind::Ambient, intensity)
    }

    /// White point light at `position`.
    pub fn point(position: Vec3A, intensity: f32) -> Self {
        Self::with_kind(LightKind::Point { position }, intensity)
    }

    /// White directional light shining back along `direction`.
    pub fn directional(direction: Vec3A, intensity: f32) -> Self {
        Self::with_kind(LightKind::Directional { direction }, intensity)
    }

    fn with_kind(kind: LightKind, intensity: f32) -> Self {
        Self { kind, intensity, color: Rgba([255, 255, 255, 255]) }
    }

    /// Unnormalized vector from `point` towards this light.
    ///
    /// `None` for ambient lights, which have no direction.
    pub fn direction_from(&self, point: Vec3A) -> Option<Vec3A> {
        match self.kind {
            LightKind::Ambient => None,
            LightKind::Point { position } => Some(position - point),
            LightKind::Directional { direction } => Some(direction),
        }
    }

    /// Window in which a sphere along [`Light::direction_from`] blocks this light.
    pub fn shadow_window(&self) -> Interval {
        match self.kind {
            LightKind::Point { .. } => Interval::POINT_SHADOW,
            _ => Interval::DIRECTIONAL_SHADOW,
        }
    }
}
