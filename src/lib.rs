//! Raycast: a CPU ray caster for spheres
//!
//! Every pixel casts one ray from a fixed eye point through a viewport plane,
//! picks the nearest sphere along it and shades the hit with ambient, diffuse
//! and specular light, optionally with hard shadows.
//!
//! The entry point for a host is [`trace`] (one ray) or [`Camera::render`]
//! (a whole [`Canvas`]).

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ray;
pub mod interval;
pub mod material;
pub mod sphere;
pub mod light;
pub mod hittable;
pub mod scene;
pub mod lighting;
pub mod tracer;
pub mod camera;
pub mod canvas;
pub mod config;
pub mod output;

/// 3-component float vector used for points and directions.
pub type Vector3D = glam::Vec3A;

pub use camera::Camera;
pub use canvas::{Canvas, ImageCanvas};
pub use config::{load_scene, ConfigError};
pub use hittable::{HitRecord, Hittable};
pub use interval::Interval;
pub use light::{Light, LightKind};
pub use lighting::{compute_lighting, RenderConfig, RenderMode};
pub use material::{Color, Material, NO_SPECULAR};
pub use ray::Ray;
pub use scene::{Animation, Scene};
pub use sphere::Sphere;
pub use tracer::trace;
