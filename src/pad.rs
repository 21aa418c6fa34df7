// The signature pad widget: wires events through containment, coordinate
// mapping and the recorder, and repaints the surface after every change.

use std::ops::{Deref, DerefMut};

use crate::config::PadConfig;
use crate::containment::{self, ContainmentTracker};
use crate::error::Error;
use crate::events::{Disposition, EventName, Host, InputEvent, ListenerTable, Scope};
use crate::export;
use crate::geometry;
use crate::recorder::StrokeRecorder;
use crate::render::Renderer;
use crate::selection::PageStyle;
use crate::surface::Surface;
use crate::types::{FrameBuffer, Stroke};

/// Receives the `data:image/png;base64,...` snapshot produced by `save`.
pub type SignatureCallback = Box<dyn FnMut(&str)>;

pub struct SignaturePad {
    renderer: Renderer,
    style: PageStyle,
    recorder: StrokeRecorder,
    tracker: ContainmentTracker,
    surface: Surface,
    listeners: Option<ListenerTable<SignaturePad>>,
    on_signature: Option<SignatureCallback>,
}

impl SignaturePad {
    pub fn new(renderer: Renderer, style: PageStyle) -> Self {
        Self {
            renderer,
            style,
            recorder: StrokeRecorder::new(),
            tracker: ContainmentTracker::default(),
            surface: Surface::new(),
            listeners: None,
            on_signature: None,
        }
    }

    pub fn from_config(config: &PadConfig, style: PageStyle) -> Self {
        Self::new(config.renderer(), style)
    }

    /// Register where `save` sends the snapshot. Replaces any earlier callback.
    pub fn on_signature<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.on_signature = Some(Box::new(callback));
    }

    /// Size the surface to its container, start from an empty log, and
    /// start listening. Listeners go away when the returned guard is dropped.
    pub fn mount(&mut self, host: &dyn Host) -> Mounted<'_> {
        let (width, height) = host.container_size();
        self.recorder.clear();
        self.tracker.reset();
        self.surface.resize(width, height, &self.renderer, self.recorder.strokes());
        self.listeners = Some(listeners());
        tracing::info!(width, height, "signature pad mounted");
        Mounted { pad: self }
    }

    fn unmount(&mut self) {
        if self.listeners.take().is_some() {
            self.recorder.end();
            self.tracker.reset();
            tracing::info!(strokes = self.recorder.strokes().len(), "signature pad unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listeners.is_some()
    }

    /// Run one raw event to completion. The result tells the host whether to
    /// suppress the event's default action (page scroll/zoom).
    pub fn dispatch(&mut self, host: &dyn Host, event: &InputEvent) -> Disposition {
        let Some(table) = self.listeners.as_ref() else {
            return Disposition::Pass;
        };
        let on_surface = containment::is_inside(host.surface_rect(), event.client);
        let handlers = table.route(event, on_surface);
        handlers
            .into_iter()
            .fold(Disposition::Pass, |acc, handler| acc.merge(handler(self, host, event)))
    }

    /// Discard every stroke and blank the surface in one step.
    pub fn clear(&mut self) {
        self.recorder.clear();
        self.surface.repaint(&self.renderer, self.recorder.strokes());
        tracing::debug!("signature cleared");
    }

    /// Encode the current surface and hand it to the `on_signature` callback.
    pub fn save(&mut self) -> Result<(), Error> {
        let url = export::to_data_url(self.surface.pixels())?;
        match self.on_signature.as_mut() {
            Some(callback) => {
                tracing::info!(bytes = url.len(), "signature produced");
                callback(&url);
            }
            None => tracing::debug!("save requested with no signature listener"),
        }
        Ok(())
    }

    /// True iff at least one stroke has been recorded.
    pub fn can_clear(&self) -> bool {
        !self.recorder.strokes().is_empty()
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.recorder.strokes()
    }

    pub fn is_drawing(&self) -> bool {
        self.recorder.is_active()
    }

    pub fn is_focused(&self) -> bool {
        self.tracker.is_focused()
    }

    pub fn surface(&self) -> &FrameBuffer {
        self.surface.pixels()
    }

    fn repaint(&mut self) {
        self.surface.repaint(&self.renderer, self.recorder.strokes());
    }
}

/// A mounted pad. Dropping it unmounts: listeners are removed and any
/// gesture in progress ends (giving text selection back to the page).
pub struct Mounted<'a> {
    pad: &'a mut SignaturePad,
}

impl Deref for Mounted<'_> {
    type Target = SignaturePad;

    fn deref(&self) -> &SignaturePad {
        &*self.pad
    }
}

impl DerefMut for Mounted<'_> {
    fn deref_mut(&mut self) -> &mut SignaturePad {
        &mut *self.pad
    }
}

impl Drop for Mounted<'_> {
    fn drop(&mut self) {
        self.pad.unmount();
    }
}

/* ---------- Listener registration ---------- */

fn listeners() -> ListenerTable<SignaturePad> {
    ListenerTable::new()
        .on(Scope::Surface, EventName::MouseDown, begin_stroke)
        .on(Scope::Surface, EventName::TouchStart, begin_stroke)
        .on(Scope::Surface, EventName::MouseMove, extend_stroke)
        .on(Scope::Surface, EventName::TouchMove, extend_stroke)
        .on(Scope::Surface, EventName::MouseUp, end_stroke)
        .on(Scope::Surface, EventName::TouchEnd, end_stroke)
        .on(Scope::Document, EventName::MouseDown, track_containment)
        .on(Scope::Document, EventName::MouseMove, track_containment)
        .on(Scope::Document, EventName::MouseUp, track_containment)
        .on(Scope::Document, EventName::TouchStart, track_containment)
        .on(Scope::Document, EventName::TouchMove, track_containment)
        .on(Scope::Document, EventName::TouchEnd, track_containment)
        .on(Scope::Document, EventName::Click, track_containment)
        .on(Scope::Document, EventName::Scroll, suppress_page_gesture)
        .on(Scope::Document, EventName::Wheel, suppress_page_gesture)
        .on(Scope::Window, EventName::Resize, resize_surface)
}

fn begin_stroke(pad: &mut SignaturePad, host: &dyn Host, event: &InputEvent) -> Disposition {
    if let Some(pos) = event.client {
        let point = geometry::to_local(pos, host.surface_rect());
        pad.recorder.begin(point, &pad.style);
        pad.repaint();
    }
    Disposition::Pass
}

fn extend_stroke(pad: &mut SignaturePad, host: &dyn Host, event: &InputEvent) -> Disposition {
    if let Some(pos) = event.client {
        let point = geometry::to_local(pos, host.surface_rect());
        if pad.recorder.extend(point) {
            pad.repaint();
        }
    }
    Disposition::Pass
}

fn end_stroke(pad: &mut SignaturePad, _host: &dyn Host, _event: &InputEvent) -> Disposition {
    pad.recorder.end();
    Disposition::Pass
}

// Sees every pointer event on the page. Ends the gesture when the pointer is
// released or wanders off the surface, which the surface listeners never see.
fn track_containment(pad: &mut SignaturePad, host: &dyn Host, event: &InputEvent) -> Disposition {
    let inside = pad.tracker.observe(host.surface_rect(), event.client);
    if !inside && pad.recorder.is_active() {
        if event.name.is_up() {
            tracing::debug!(event = ?event.name, "pointer released off surface");
            pad.recorder.end();
        } else if event.name.is_move() {
            tracing::debug!(event = ?event.name, "pointer left surface mid-stroke");
            pad.recorder.end();
        }
    }
    Disposition::Pass
}

fn suppress_page_gesture(pad: &mut SignaturePad, _host: &dyn Host, event: &InputEvent) -> Disposition {
    if pad.tracker.should_suppress_gesture() {
        tracing::debug!(event = ?event.name, "page gesture suppressed");
        Disposition::PreventDefault
    } else {
        Disposition::Pass
    }
}

fn resize_surface(pad: &mut SignaturePad, host: &dyn Host, _event: &InputEvent) -> Disposition {
    let (width, height) = host.container_size();
    pad.surface.resize(width, height, &pad.renderer, pad.recorder.strokes());
    Disposition::Pass
}
