//! Scene files.
//!
//! Scenes can be described in TOML and loaded at startup instead of the
//! built-in demo scene:
//!
//! ```toml
//! background = [0, 0, 0, 255]
//!
//! [[spheres]]
//! center = [0.0, 1.0, 3.0]
//! radius = 1.0
//! color = [255, 0, 0, 255]
//! specular = 500.0
//!
//! [[lights]]
//! kind = "point"
//! intensity = 0.6
//! position = [2.0, 1.0, 0.0]
//! ```
//!
//! Everything is validated once here so the tracing code can rely on its
//! preconditions without checking them per ray.

use std::path::Path;

use glam::Vec3A;
use image::Rgba;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::light::{Light, LightKind};
use crate::material::{specular_exponent, Material, NO_SPECULAR};
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Errors raised while loading a scene file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read scene file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for a scene.
    #[error("failed to parse scene: {0}")]
    Parse(#[from] toml::de::Error),

    /// A sphere entry is unusable.
    #[error("sphere {index}: {reason}")]
    InvalidSphere {
        /// Position of the sphere in the file.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A light entry is unusable.
    #[error("light {index}: {reason}")]
    InvalidLight {
        /// Position of the light in the file.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },
}

/// On-disk form of a [`Scene`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    /// Color for rays that hit nothing.
    #[serde(default = "default_background")]
    pub background: [u8; 4],
    /// Spheres in scan order.
    #[serde(default)]
    pub spheres: Vec<SphereConfig>,
    /// Lights in accumulation order.
    #[serde(default)]
    pub lights: Vec<LightConfig>,
}

/// On-disk form of a [`Sphere`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    /// Center in world coordinates.
    pub center: Vec3A,
    /// Strictly positive radius.
    pub radius: f32,
    /// RGBA base color.
    pub color: [u8; 4],
    /// Positive specular exponent, or -1 / omitted for none.
    pub specular: Option<f32>,
}

/// Light variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKindConfig {
    /// See [`LightKind::Ambient`].
    Ambient,
    /// See [`LightKind::Point`].
    Point,
    /// See [`LightKind::Directional`].
    Directional,
}

/// On-disk form of a [`Light`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightConfig {
    /// Which kind of light this is.
    pub kind: LightKindConfig,
    /// Non-negative contribution weight.
    pub intensity: f32,
    /// Required for point lights.
    pub position: Option<Vec3A>,
    /// Required for directional lights, must be nonzero.
    pub direction: Option<Vec3A>,
    /// Nominal color, white when omitted.
    #[serde(default = "default_light_color")]
    pub color: [u8; 4],
}

fn default_background() -> [u8; 4] {
    Scene::BLACK.0
}

fn default_light_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

impl SceneConfig {
    /// Parse a scene description from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Validate and convert into a traceable scene.
    pub fn into_scene(self) -> Result<Scene, ConfigError> {
        let spheres = self
            .spheres
            .into_iter()
            .enumerate()
            .map(|(index, s)| {
                s.into_sphere()
                    .map_err(|reason| ConfigError::InvalidSphere { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let lights = self
            .lights
            .into_iter()
            .enumerate()
            .map(|(index, l)| {
                l.into_light()
                    .map_err(|reason| ConfigError::InvalidLight { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scene {
            spheres,
            lights,
            background: Rgba(self.background),
        })
    }
}

impl SphereConfig {
    fn into_sphere(self) -> Result<Sphere, String> {
        if !self.center.is_finite() {
            return Err("center must be finite".into());
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(format!("radius must be positive, got {}", self.radius));
        }
        let specular = match self.specular {
            None => None,
            Some(s) if s == NO_SPECULAR || (s.is_finite() && s > 0.0) => specular_exponent(s),
            Some(s) => return Err(format!("specular must be positive or -1, got {}", s)),
        };
        Ok(Sphere::new(self.center, self.radius, Material { color: Rgba(self.color), specular }))
    }
}

impl LightConfig {
    fn into_light(self) -> Result<Light, String> {
        if !(self.intensity.is_finite() && self.intensity >= 0.0) {
            return Err(format!("intensity must be non-negative, got {}", self.intensity));
        }
        let kind = match self.kind {
            LightKindConfig::Ambient => LightKind::Ambient,
            LightKindConfig::Point => match self.position {
                Some(position) if position.is_finite() => LightKind::Point { position },
                Some(_) => return Err("position must be finite".into()),
                None => return Err("point light needs a position".into()),
            },
            LightKindConfig::Directional => match self.direction {
                Some(direction) if direction.is_finite() && direction != Vec3A::ZERO => {
                    LightKind::Directional { direction }
                }
                Some(_) => return Err("direction must be finite and nonzero".into()),
                None => return Err("directional light needs a direction".into()),
            },
        };
        Ok(Light {
            kind,
            intensity: self.intensity,
            color: Rgba(self.color),
        })
    }
}

/// Read, validate and convert a TOML scene file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let scene = SceneConfig::from_toml(&text)?.into_scene()?;
    debug!(
        "Loaded scene {}: {} spheres, {} lights",
        path.display(),
        scene.spheres.len(),
        scene.lights.len()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_TOML: &str = r#"
        background = [10, 20, 30, 255]

        [[spheres]]
        center = [0.0, 1.0, 3.0]
        radius = 1.0
        color = [255, 0, 0, 255]
        specular = 500.0

        [[spheres]]
        center = [2.0, 0.0, 4.0]
        radius = 1.0
        color = [0, 255, 0, 255]
        specular = -1.0

        [[lights]]
        kind = "ambient"
        intensity = 0.2

        [[lights]]
        kind = "point"
        intensity = 0.6
        position = [2.0, 1.0, 0.0]

        [[lights]]
        kind = "directional"
        intensity = 0.2
        direction = [1.0, 4.0, 4.0]
        color = [255, 200, 200, 255]
    "#;

    fn parse(text: &str) -> Result<Scene, ConfigError> {
        SceneConfig::from_toml(text)?.into_scene()
    }

    #[test]
    fn parses_full_scene() {
        let scene = parse(DEMO_TOML).expect("valid scene");
        assert_eq!(scene.background, Rgba([10, 20, 30, 255]));
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.spheres[0].material.specular, Some(500.0));
        assert_eq!(scene.spheres[1].material.specular, None);
        assert_eq!(scene.lights[0].kind, LightKind::Ambient);
        assert_eq!(scene.lights[1].kind, LightKind::Point { position: Vec3A::new(2.0, 1.0, 0.0) });
        assert_eq!(scene.lights[2].color, Rgba([255, 200, 200, 255]));
        assert_eq!(scene.lights[1].color, Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn empty_file_is_empty_black_scene() {
        let scene = parse("").expect("empty scene");
        assert_eq!(scene, Scene::new());
    }

    #[test]
    fn rejects_non_positive_radius() {
        let err = parse("[[spheres]]\ncenter = [0.0, 0.0, 0.0]\nradius = 0.0\ncolor = [0, 0, 0, 255]\n")
            .expect_err("zero radius");
        assert!(matches!(err, ConfigError::InvalidSphere { index: 0, .. }));
    }

    #[test]
    fn rejects_bad_specular() {
        let err = parse("[[spheres]]\ncenter = [0.0, 0.0, 0.0]\nradius = 1.0\ncolor = [0, 0, 0, 255]\nspecular = -2.0\n")
            .expect_err("negative specular");
        assert!(matches!(err, ConfigError::InvalidSphere { .. }));
    }

    #[test]
    fn rejects_point_light_without_position() {
        let err = parse("[[lights]]\nkind = \"point\"\nintensity = 0.5\n").expect_err("missing position");
        assert!(matches!(err, ConfigError::InvalidLight { index: 0, .. }));
    }

    #[test]
    fn rejects_zero_directional_light() {
        let err = parse("[[lights]]\nkind = \"directional\"\nintensity = 0.5\ndirection = [0.0, 0.0, 0.0]\n")
            .expect_err("zero direction");
        assert!(matches!(err, ConfigError::InvalidLight { .. }));
    }

    #[test]
    fn rejects_negative_intensity() {
        let err = parse("[[lights]]\nkind = \"ambient\"\nintensity = -0.5\n").expect_err("negative intensity");
        assert!(matches!(err, ConfigError::InvalidLight { .. }));
    }

    #[test]
    fn rejects_unknown_kind_and_fields() {
        assert!(matches!(parse("[[lights]]\nkind = \"spot\"\nintensity = 0.5\n"), Err(ConfigError::Parse(_))));
        assert!(matches!(parse("fog = 1.0\n"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_scene("/definitely/not/here.toml").expect_err("missing file");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
