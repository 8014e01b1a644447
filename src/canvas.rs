//! Framebuffers the camera draws into.
//!
//! Canvas coordinates are centered: `(0, 0)` is the middle of the image, `x`
//! grows to the right and `y` grows upwards.

use image::{ImageBuffer, RgbaImage};
use crate::material::Color;

/// Pixel sink addressed in centered coordinates.
pub trait Canvas {
    /// Canvas width in pixels.
    fn width(&self) -> u32;

    /// Canvas height in pixels.
    fn height(&self) -> u32;

    /// Write one pixel. Coordinates outside the canvas are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}

/// Canvas backed by an in-memory RGBA image.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    image: RgbaImage,
}

impl ImageCanvas {
    /// Transparent-black canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: ImageBuffer::new(width, height) }
    }

    /// Borrow the underlying image (row 0 is the top).
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the underlying image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Read back a pixel in centered coordinates.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.to_buffer(x, y).map(|(bx, by)| *self.image.get_pixel(bx, by))
    }

    fn to_buffer(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);
        let bx = w / 2 + x as i64;
        let by = h / 2 - y as i64 - 1;
        if bx < 0 || bx >= w || by < 0 || by >= h {
            return None;
        }
        Some((bx as u32, by as u32))
    }
}

impl Canvas for ImageCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((bx, by)) = self.to_buffer(x, y) {
            self.image.put_pixel(bx, by, color);
        }
    }
}
