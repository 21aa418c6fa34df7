// Core types shared by the recorder, renderer and export.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // surface width (pixels)
    pub height: usize,     // surface height (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A fresh backing store; every pixel starts at 0 (black, like a reset raster).
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    pub fn fill(&mut self, color: Color) {
        let packed = color.packed();
        for p in &mut self.pixels { *p = packed; }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height { return None; }
        Some(self.pixels[y * self.width + x])
    }
}

/// RGB colour stored as 0xRRGGBB (same layout the framebuffer uses).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x00_00_00_00);
    pub const WHITE: Color = Color(0x00_FF_FF_FF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn packed(self) -> u32 {
        self.0 & 0x00_FF_FF_FF
    }
}

/// Surface-local position in pixels; origin at the surface's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Nearest pixel, used when rasterising.
    #[inline]
    pub fn pixel(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

/// One pen-down to pen-up gesture. Points are kept in arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
