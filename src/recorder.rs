// Stroke recorder: the append-only stroke log plus the active-stroke state.
//
// Idle --down--> Active --move--> Active --up/leave/forced--> Idle
//
// The selection guard lives exactly as long as the active state, so every
// way out of Active gives text selection back to the page.

use crate::selection::{PageStyle, SelectionGuard};
use crate::types::{Point, Stroke};

#[derive(Debug, Default)]
pub struct StrokeRecorder {
    strokes: Vec<Stroke>,
    active: Option<SelectionGuard>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Idle -> Active. Opens a new stroke whose first point is `point`.
    /// A down while already Active opens another stroke and keeps the
    /// existing selection guard (single pointer hardware never does this).
    pub fn begin(&mut self, point: Point, style: &PageStyle) {
        if self.active.is_none() {
            self.active = Some(style.suppress());
        }
        self.strokes.push(Stroke { points: vec![point] });
        tracing::debug!(stroke = self.strokes.len(), x = point.x, y = point.y, "stroke begin");
    }

    /// Active -> Active. Returns false (and records nothing) while idle.
    pub fn extend(&mut self, point: Point) -> bool {
        if self.active.is_none() {
            return false;
        }
        match self.strokes.last_mut() {
            Some(stroke) => {
                stroke.points.push(point);
                true
            }
            None => false,
        }
    }

    /// Active -> Idle. Returns false when already idle.
    pub fn end(&mut self) -> bool {
        match self.active.take() {
            Some(_guard) => {
                tracing::debug!(
                    points = self.strokes.last().map_or(0, |s| s.points.len()),
                    "stroke end"
                );
                true
            }
            None => false,
        }
    }

    /// Drop every stroke and go idle.
    pub fn clear(&mut self) {
        self.active = None;
        self.strokes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::UserSelect;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn down_moves_up_build_one_stroke() {
        let style = PageStyle::default();
        let mut rec = StrokeRecorder::new();

        rec.begin(p(10.0, 10.0), &style);
        assert!(rec.extend(p(20.0, 10.0)));
        assert!(rec.extend(p(20.0, 20.0)));
        assert!(rec.end());

        assert_eq!(rec.strokes().len(), 1);
        assert_eq!(rec.strokes()[0].points, vec![p(10.0, 10.0), p(20.0, 10.0), p(20.0, 20.0)]);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let style = PageStyle::default();
        let mut rec = StrokeRecorder::new();
        assert!(!rec.extend(p(1.0, 1.0)));

        rec.begin(p(0.0, 0.0), &style);
        rec.end();
        assert!(!rec.extend(p(5.0, 5.0)));
        assert_eq!(rec.strokes()[0].points.len(), 1);
    }

    #[test]
    fn up_while_idle_is_noop() {
        let mut rec = StrokeRecorder::new();
        assert!(!rec.end());
        assert!(rec.strokes().is_empty());
    }

    #[test]
    fn selection_suppressed_only_while_active() {
        let style = PageStyle::new(UserSelect::Auto);
        let mut rec = StrokeRecorder::new();

        rec.begin(p(0.0, 0.0), &style);
        assert_eq!(style.user_select(), UserSelect::None);
        rec.end();
        assert_eq!(style.user_select(), UserSelect::Auto);
    }

    #[test]
    fn second_down_opens_new_stroke_and_keeps_guard() {
        let style = PageStyle::new(UserSelect::Auto);
        let mut rec = StrokeRecorder::new();

        rec.begin(p(0.0, 0.0), &style);
        rec.begin(p(5.0, 5.0), &style);
        assert!(rec.extend(p(6.0, 6.0)));
        assert_eq!(rec.strokes().len(), 2);
        assert_eq!(rec.strokes()[1].points.len(), 2);
        assert_eq!(style.user_select(), UserSelect::None);

        rec.end();
        assert_eq!(style.user_select(), UserSelect::Auto);
    }

    #[test]
    fn clear_mid_gesture_restores_selection() {
        let style = PageStyle::new(UserSelect::Auto);
        let mut rec = StrokeRecorder::new();

        rec.begin(p(0.0, 0.0), &style);
        rec.clear();

        assert!(!rec.is_active());
        assert!(rec.strokes().is_empty());
        assert_eq!(style.user_select(), UserSelect::Auto);

        rec.clear();
        assert!(rec.strokes().is_empty());
    }
}
