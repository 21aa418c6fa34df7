// Window + page compositing for the demo host.
// Visual effects provided here:
// 1) A resizable window showing a grey "page" with the white signature surface on it.
// 2) A crosshair that follows your mouse.

use crate::error::Error;
use crate::render::{draw_line, put_pixel};
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current window size; changes when the user drags the border.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Mouse position in window pixels. Not clamped: positions past the
    /// window edge come through as-is while the window tracks the mouse.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Pass)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Some(..) on frames where the wheel/trackpad scrolled.
    pub fn scroll_wheel(&self) -> Option<(f32, f32)> {
        self.window.get_scroll_wheel()
    }

    /// Visual: when pressed, the signature disappears.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/// Copy `src` into `dst` with its top-left corner at (left, top), clipped to `dst`.
pub fn blit(dst: &mut FrameBuffer, src: &FrameBuffer, left: usize, top: usize) {
    if left >= dst.width || top >= dst.height {
        return;
    }
    let cols = src.width.min(dst.width - left);
    let rows = src.height.min(dst.height - top);
    for y in 0..rows {
        let s = y * src.width;
        let d = (top + y) * dst.width + left;
        dst.pixels[d..d + cols].copy_from_slice(&src.pixels[s..s + cols]);
    }
}

/// Draw a small crosshair centered at (cx,cy).
/// Visual: a "+" shape (with a tiny gap at the center) follows your mouse.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    let mut plot = |fb: &mut FrameBuffer, x: i32, y: i32| put_pixel(fb, x, y, color);
    draw_line(fb, cx - size, cy, cx - 2, cy, &mut plot);
    draw_line(fb, cx + 2, cy, cx + size, cy, &mut plot);
    draw_line(fb, cx, cy - size, cx, cy - 2, &mut plot);
    draw_line(fb, cx, cy + 2, cx, cy + size, &mut plot);
    put_pixel(fb, cx, cy, color);
}
