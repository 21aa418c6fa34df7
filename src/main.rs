// What you SEE:
// • A grey page with a white signature surface in the middle.
// • Hold Left Mouse on the surface: ink follows the cursor.
// • Let go (anywhere, even off the surface) to lift the pen.
// • C clears the signature. S saves it as a PNG. ESC quits.

use signature_pad::config::CONFIG_FILE;
use signature_pad::draw::{blit, draw_crosshair, Drawer};
use signature_pad::{
    export, logging, Color, Disposition, Error, FrameBuffer, Host, InputEvent, PadConfig,
    PageStyle, Rect, SignaturePad,
};
use std::path::PathBuf;

const PAGE_COLOR: Color = Color::rgb(0x40, 0x44, 0x4B);
const CROSSHAIR_COLOR: u32 = 0x00_FF_CC_33;

/// The window is the page; the surface sits inside it, `margin` pixels from every edge.
#[derive(Clone, Copy, PartialEq)]
struct WindowLayout {
    width: usize,
    height: usize,
    margin: usize,
}

impl WindowLayout {
    fn new((width, height): (usize, usize), margin: usize) -> Self {
        Self { width, height, margin }
    }

    fn surface_size(&self) -> (usize, usize) {
        (
            self.width.saturating_sub(2 * self.margin),
            self.height.saturating_sub(2 * self.margin),
        )
    }
}

impl Host for WindowLayout {
    fn surface_rect(&self) -> Rect {
        let (w, h) = self.surface_size();
        Rect::new(self.margin as f32, self.margin as f32, w as f32, h as f32)
    }

    fn container_size(&self) -> (usize, usize) {
        self.surface_size()
    }
}

fn main() -> Result<(), Error> {
    /* --- Settings + logging --- */
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = PadConfig::load(&config_path)?;
    logging::init(config.debug_logging);
    let export_path = PathBuf::from(&config.export_path);

    /* --- Window + pad --- */
    let mut drawer = Drawer::new("Signature Pad", config.window_width, config.window_height)?;
    let style = PageStyle::default();
    let mut pad = SignaturePad::from_config(&config, style.clone());
    pad.on_signature(|url| tracing::info!(data_url_len = url.len(), "signature ready"));

    let mut layout = WindowLayout::new(drawer.size(), config.page_margin);
    let mut screen = FrameBuffer::new(layout.width, layout.height);
    let mut mounted = pad.mount(&layout);

    let mut was_down = false;
    let mut last_pos: Option<(f32, f32)> = None;
    let mut last_select = style.user_select();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Window resized? Visual: the surface follows the window size. */
        let size = drawer.size();
        if size != (layout.width, layout.height) {
            layout = WindowLayout::new(size, config.page_margin);
            screen = FrameBuffer::new(layout.width, layout.height);
            mounted.dispatch(&layout, &InputEvent::resize());
        }

        /* 2) Turn mouse state into pointer events. */
        let pos = drawer.mouse_pos();
        let down = drawer.left_mouse_down();
        if let Some((x, y)) = pos.or(last_pos) {
            if down && !was_down {
                mounted.dispatch(&layout, &InputEvent::mouse_down(x, y));
            } else if !down && was_down {
                mounted.dispatch(&layout, &InputEvent::mouse_up(x, y));
            } else if pos.is_some() && pos != last_pos {
                mounted.dispatch(&layout, &InputEvent::mouse_move(x, y));
            }
        }
        was_down = down;
        last_pos = pos.or(last_pos);

        // The window is the whole page and has nothing to scroll, so the
        // disposition and text-selection state are only reported, not applied.
        if drawer.scroll_wheel().is_some()
            && mounted.dispatch(&layout, &InputEvent::wheel()) == Disposition::Pass
        {
            tracing::trace!("wheel left to the page");
        }

        if style.user_select() != last_select {
            last_select = style.user_select();
            tracing::trace!(user_select = ?last_select, "page text selection changed");
        }

        /* 3) Keys */
        if drawer.c_pressed_once() {
            mounted.clear();
        }
        if drawer.s_pressed_once() {
            let saved = mounted
                .save()
                .and_then(|()| export::save_png(mounted.surface(), &export_path));
            match saved {
                Ok(()) => tracing::info!(path = %export_path.display(), "signature saved"),
                Err(e) => tracing::error!("save failed: {e}"),
            }
        }

        /* 4) Page, surface, crosshair, present. */
        screen.fill(PAGE_COLOR);
        blit(&mut screen, mounted.surface(), layout.margin, layout.margin);
        if let Some((mx, my)) = pos {
            draw_crosshair(&mut screen, mx as i32, my as i32, 10, CROSSHAIR_COLOR);
        }
        drawer.present(&screen)?;
    }

    Ok(())
}
