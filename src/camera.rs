//! Camera for ray generation and frame rendering

use std::time::{Duration, Instant};

use glam::Vec3A;
use log::debug;
use rayon::prelude::*;

use crate::canvas::Canvas;
use crate::interval::Interval;
use crate::lighting::RenderConfig;
use crate::material::Color;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::tracer::trace;

/// Pinhole camera looking down +z through a viewport plane.
///
/// One ray per pixel, no jitter and no depth of field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye point every primary ray starts from.
    pub position: Vec3A,
    /// Extent of the viewport plane along both axes, before aspect correction.
    pub viewport_size: f32,
    /// Distance from the eye to the viewport plane.
    pub projection_plane_z: f32,
}

impl Camera {
    /// Creates a camera at the origin with a unit viewport one unit away.
    pub fn new() -> Self {
        Self {
            position: Vec3A::ZERO,
            viewport_size: 1.0,
            projection_plane_z: 1.0,
        }
    }

    /// Direction through the centered canvas pixel `(x, y)`.
    ///
    /// Maps to `(x * Vw/W * aspect, y * Vh/H, d)` with `aspect = W/H`. The
    /// result is not normalized.
    pub fn canvas_to_viewport(&self, x: f32, y: f32, width: u32, height: u32) -> Vec3A {
        let aspect_ratio = width as f32 / height as f32;
        Vec3A::new(
            x * self.viewport_size / width as f32 * aspect_ratio,
            y * self.viewport_size / height as f32,
            self.projection_plane_z,
        )
    }

    /// Trace every pixel of `canvas` and write the results with `set_pixel`.
    ///
    /// Rows are traced in parallel against the shared, unmodified scene, then
    /// written to the canvas in order. Returns the wall-clock time spent.
    /// The canvas must be at least one pixel in each dimension.
    pub fn render<C: Canvas + ?Sized>(&self, scene: &Scene, config: &RenderConfig, canvas: &mut C) -> Duration {
        let start = Instant::now();
        let (width, height) = (canvas.width(), canvas.height());
        let (half_w, half_h) = ((width / 2) as i32, (height / 2) as i32);

        // Buffer row `by` holds canvas row `y = H/2 - 1 - by`
        let rows: Vec<Vec<Color>> = (0..height as i32)
            .into_par_iter()
            .map(|by| {
                let y = half_h - 1 - by;
                (0..width as i32)
                    .map(|bx| {
                        let x = bx - half_w;
                        let direction = self.canvas_to_viewport(x as f32, y as f32, width, height);
                        trace(scene, config, &Ray::new(self.position, direction), Interval::PRIMARY)
                    })
                    .collect()
            })
            .collect();

        for (by, row) in rows.into_iter().enumerate() {
            let y = half_h - 1 - by as i32;
            for (bx, color) in row.into_iter().enumerate() {
                canvas.set_pixel(bx as i32 - half_w, y, color);
            }
        }

        let elapsed = start.elapsed();
        debug!("Traced {}x{} pixels in {:.2?}", width, height, elapsed);
        elapsed
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
