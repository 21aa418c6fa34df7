// Surface lifecycle: the raster the user draws on, sized to its container.

use crate::render::Renderer;
use crate::types::{FrameBuffer, Stroke};

#[derive(Debug)]
pub struct Surface {
    fb: FrameBuffer,
}

impl Surface {
    pub fn new() -> Self {
        Self { fb: FrameBuffer::new(0, 0) }
    }

    pub fn pixels(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn size(&self) -> (usize, usize) {
        (self.fb.width, self.fb.height)
    }

    /// Reallocate the backing store at the container's size (this wipes it,
    /// even when the size did not change) and repaint from the stroke log.
    pub fn resize(&mut self, width: usize, height: usize, renderer: &Renderer, strokes: &[Stroke]) {
        self.fb = FrameBuffer::new(width, height);
        tracing::debug!(width, height, "surface resized");
        self.repaint(renderer, strokes);
    }

    pub fn repaint(&mut self, renderer: &Renderer, strokes: &[Stroke]) {
        renderer.repaint(&mut self.fb, strokes);
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}
