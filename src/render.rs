// Renderer: full repaint of the surface from the stroke log.
// Visual: background everywhere, then each stroke as straight ink segments
// between consecutive recorded points (no smoothing, no anti-aliasing).

use crate::types::{Color, FrameBuffer, Stroke};

/// Widest pen the renderer will draw; wider settings are drawn at this width.
pub const MAX_LINE_WIDTH: u32 = 64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Renderer {
    pub ink: Color,
    pub background: Color,
    // Pixels. The pen tip is a disc of radius line_width/2, so even widths
    // draw one pixel wider: 0|1 -> 1px, 2|3 -> 3px, 4|5 -> 5px.
    pub line_width: u32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { ink: Color::BLACK, background: Color::WHITE, line_width: 1 }
    }
}

impl Renderer {
    /// Clear the whole surface, then draw every non-empty stroke.
    /// Repainting twice with the same log gives the same pixels.
    pub fn repaint(&self, fb: &mut FrameBuffer, strokes: &[Stroke]) {
        fb.fill(self.background);
        let ink = self.ink.packed();
        let radius = (self.line_width.min(MAX_LINE_WIDTH) / 2) as i64;

        for stroke in strokes.iter().filter(|s| !s.is_empty()) {
            for seg in stroke.points.windows(2) {
                let (x0, y0) = seg[0].pixel();
                let (x1, y1) = seg[1].pixel();
                draw_line(fb, x0, y0, x1, y1, |fb, x, y| stamp(fb, x, y, radius, ink));
            }
        }
    }
}

/* ---------- Software drawing: pixels, lines, round pen tip ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Filled disc of `radius` around (cx,cy); radius 0 is a single pixel.
/// Only the part of the disc's bounding box inside `fb` is scanned.
fn stamp(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i64, color: u32) {
    if radius <= 0 {
        put_pixel(fb, cx, cy, color);
        return;
    }
    let (cx, cy) = (cx as i64, cy as i64);
    let r2 = radius * radius;
    let (w, h) = (fb.width as i64, fb.height as i64);
    let (x_lo, x_hi) = ((cx - radius).max(0), (cx + radius).min(w - 1));
    let (y_lo, y_hi) = ((cy - radius).max(0), (cy + radius).min(h - 1));
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r2 {
                let idx = y as usize * fb.width + x as usize;
                fb.pixels[idx] = color;
            }
        }
    }
}

/// Walk the Bresenham line from (x0,y0) to (x1,y1), both ends included,
/// calling `plot` for every pixel on it.
pub fn draw_line<F>(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F)
where
    F: FnMut(&mut FrameBuffer, i32, i32),
{
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        plot(fb, x0, y0);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}
