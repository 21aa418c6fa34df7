// Coordinate mapping: absolute client position -> surface-local point.

use crate::types::Point;

/// Absolute position reported by the platform (window/page coordinates).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientPos {
    pub x: f32,
    pub y: f32,
}

impl ClientPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of the surface in client coordinates.
/// Hosts hand out a fresh one per event; never cache it across events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Half-open: the right and bottom edges belong to whatever is next to the surface.
    pub fn contains(&self, pos: ClientPos) -> bool {
        pos.x >= self.left
            && pos.y >= self.top
            && pos.x < self.left + self.width
            && pos.y < self.top + self.height
    }
}

/// No range check: positions off the surface come back negative or past width/height.
pub fn to_local(pos: ClientPos, rect: Rect) -> Point {
    Point::new(pos.x - rect.left, pos.y - rect.top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_rect_origin() {
        let rect = Rect::new(100.0, 50.0, 300.0, 200.0);
        assert_eq!(to_local(ClientPos::new(110.0, 60.0), rect), Point::new(10.0, 10.0));
    }

    #[test]
    fn out_of_surface_positions_are_not_clamped() {
        let rect = Rect::new(100.0, 50.0, 300.0, 200.0);
        assert_eq!(to_local(ClientPos::new(90.0, 300.0), rect), Point::new(-10.0, 250.0));
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(ClientPos::new(10.0, 10.0)));
        assert!(rect.contains(ClientPos::new(29.5, 29.5)));
        assert!(!rect.contains(ClientPos::new(30.0, 15.0)));
        assert!(!rect.contains(ClientPos::new(9.9, 15.0)));
    }
}
