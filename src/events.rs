// Raw input events and the table that routes them to handlers.

use std::collections::HashMap;

use crate::geometry::{ClientPos, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventName {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    Click,
    Scroll,
    Wheel,
    Resize,
}

impl EventName {
    pub fn is_move(self) -> bool {
        matches!(self, EventName::MouseMove | EventName::TouchMove)
    }

    /// Button release, touch end, or a click (which fires after the release).
    pub fn is_up(self) -> bool {
        matches!(self, EventName::MouseUp | EventName::TouchEnd | EventName::Click)
    }
}

/// Where a listener is attached. Dispatch visits them in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    Surface,
    Document,
    Window,
}

const DISPATCH_ORDER: [Scope; 3] = [Scope::Surface, Scope::Document, Scope::Window];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputEvent {
    pub name: EventName,
    pub client: Option<ClientPos>, // absent for scroll/wheel/resize
}

impl InputEvent {
    pub fn at(name: EventName, x: f32, y: f32) -> Self {
        Self { name, client: Some(ClientPos::new(x, y)) }
    }

    pub fn mouse_down(x: f32, y: f32) -> Self { Self::at(EventName::MouseDown, x, y) }
    pub fn mouse_move(x: f32, y: f32) -> Self { Self::at(EventName::MouseMove, x, y) }
    pub fn mouse_up(x: f32, y: f32) -> Self { Self::at(EventName::MouseUp, x, y) }
    pub fn touch_start(x: f32, y: f32) -> Self { Self::at(EventName::TouchStart, x, y) }
    pub fn touch_move(x: f32, y: f32) -> Self { Self::at(EventName::TouchMove, x, y) }
    pub fn touch_end(x: f32, y: f32) -> Self { Self::at(EventName::TouchEnd, x, y) }
    pub fn click(x: f32, y: f32) -> Self { Self::at(EventName::Click, x, y) }

    pub fn scroll() -> Self { Self { name: EventName::Scroll, client: None } }
    pub fn wheel() -> Self { Self { name: EventName::Wheel, client: None } }
    pub fn resize() -> Self { Self { name: EventName::Resize, client: None } }
}

/// What the host should do with the event's default action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Disposition {
    #[default]
    Pass,
    PreventDefault,
}

impl Disposition {
    pub fn merge(self, other: Disposition) -> Disposition {
        if self == Disposition::PreventDefault || other == Disposition::PreventDefault {
            Disposition::PreventDefault
        } else {
            Disposition::Pass
        }
    }
}

/// The page the pad lives in. Queried on every event; nothing is cached.
pub trait Host {
    /// Surface bounding rectangle in client coordinates.
    fn surface_rect(&self) -> Rect;
    /// Rendered size of the surface's container, in pixels.
    fn container_size(&self) -> (usize, usize);
}

pub type Handler<T> = fn(&mut T, &dyn Host, &InputEvent) -> Disposition;

/// Event name -> handler, per scope.
pub struct ListenerTable<T> {
    handlers: HashMap<(Scope, EventName), Handler<T>>,
}

impl<T> ListenerTable<T> {
    pub fn new() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// Builder-style registration; a later registration for the same slot wins.
    pub fn on(mut self, scope: Scope, name: EventName, handler: Handler<T>) -> Self {
        self.handlers.insert((scope, name), handler);
        self
    }

    /// Handlers that should see `event`, in bubbling order. Surface listeners
    /// only fire when the event lands on the surface.
    pub fn route(&self, event: &InputEvent, on_surface: bool) -> Vec<Handler<T>> {
        DISPATCH_ORDER
            .iter()
            .filter(|&&scope| scope != Scope::Surface || on_surface)
            .filter_map(|&scope| self.handlers.get(&(scope, event.name)).copied())
            .collect()
    }
}

impl<T> Default for ListenerTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Trace(Vec<&'static str>);

    struct NoHost;
    impl Host for NoHost {
        fn surface_rect(&self) -> Rect { Rect::new(0.0, 0.0, 0.0, 0.0) }
        fn container_size(&self) -> (usize, usize) { (0, 0) }
    }

    fn surface(t: &mut Trace, _: &dyn Host, _: &InputEvent) -> Disposition {
        t.0.push("surface");
        Disposition::Pass
    }

    fn document(t: &mut Trace, _: &dyn Host, _: &InputEvent) -> Disposition {
        t.0.push("document");
        Disposition::PreventDefault
    }

    fn table() -> ListenerTable<Trace> {
        ListenerTable::new()
            .on(Scope::Document, EventName::MouseDown, document)
            .on(Scope::Surface, EventName::MouseDown, surface)
    }

    #[test]
    fn surface_runs_before_document() {
        let mut trace = Trace(Vec::new());
        for h in table().route(&InputEvent::mouse_down(1.0, 1.0), true) {
            h(&mut trace, &NoHost, &InputEvent::mouse_down(1.0, 1.0));
        }
        assert_eq!(trace.0, vec!["surface", "document"]);
    }

    #[test]
    fn surface_skipped_off_surface() {
        let handlers = table().route(&InputEvent::mouse_down(1.0, 1.0), false);
        assert_eq!(handlers.len(), 1);
    }

    #[test]
    fn unregistered_events_route_nowhere() {
        assert!(table().route(&InputEvent::wheel(), true).is_empty());
    }

    #[test]
    fn prevent_default_wins() {
        assert_eq!(Disposition::Pass.merge(Disposition::PreventDefault), Disposition::PreventDefault);
        assert_eq!(Disposition::Pass.merge(Disposition::Pass), Disposition::Pass);
    }
}
