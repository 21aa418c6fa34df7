//! Freehand signature capture: pointer/touch events in, strokes recorded,
//! surface repainted, PNG snapshot out.
//!
//! ```no_run
//! use signature_pad::{Host, InputEvent, PageStyle, Rect, Renderer, SignaturePad};
//!
//! struct Page;
//! impl Host for Page {
//!     fn surface_rect(&self) -> Rect { Rect::new(0.0, 0.0, 300.0, 150.0) }
//!     fn container_size(&self) -> (usize, usize) { (300, 150) }
//! }
//!
//! let mut pad = SignaturePad::new(Renderer::default(), PageStyle::default());
//! pad.on_signature(|url| println!("{} bytes", url.len()));
//! let mut mounted = pad.mount(&Page);
//! mounted.dispatch(&Page, &InputEvent::mouse_down(10.0, 10.0));
//! mounted.dispatch(&Page, &InputEvent::mouse_move(40.0, 20.0));
//! mounted.dispatch(&Page, &InputEvent::mouse_up(40.0, 20.0));
//! mounted.save().unwrap();
//! ```

pub mod config;
pub mod containment;
pub mod draw;
pub mod error;
pub mod events;
pub mod export;
pub mod geometry;
pub mod logging;
pub mod pad;
pub mod recorder;
pub mod render;
pub mod selection;
pub mod surface;
pub mod types;

pub use config::PadConfig;
pub use error::Error;
pub use events::{Disposition, EventName, Host, InputEvent};
pub use geometry::{ClientPos, Rect};
pub use pad::{Mounted, SignaturePad};
pub use render::Renderer;
pub use selection::{PageStyle, UserSelect};
pub use types::{Color, FrameBuffer, Point, Stroke};
