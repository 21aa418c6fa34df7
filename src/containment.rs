// Containment tracker: is the pointer currently over the surface?
// Fed by document-level events so it keeps working after the pointer leaves.

use crate::geometry::{ClientPos, Rect};

/// Geometric containment; `None` (events without a position) is never inside.
pub fn is_inside(rect: Rect, pos: Option<ClientPos>) -> bool {
    pos.is_some_and(|p| rect.contains(p))
}

#[derive(Debug, Default)]
pub struct ContainmentTracker {
    focused: bool,
}

impl ContainmentTracker {
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Recompute focus from the latest pointer event.
    pub fn observe(&mut self, rect: Rect, pos: Option<ClientPos>) -> bool {
        self.focused = is_inside(rect, pos);
        self.focused
    }

    /// Scroll/wheel while focused would move the page under the pen.
    pub fn should_suppress_gesture(&self) -> bool {
        self.focused
    }

    pub fn reset(&mut self) {
        self.focused = false;
    }
}
