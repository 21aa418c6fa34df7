use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::render::{Renderer, MAX_LINE_WIDTH};
use crate::types::Color;

pub const CONFIG_FILE: &str = "signature_pad.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Pen colour, 0xRRGGBB.
    pub ink: Color,
    /// Surface fill, 0xRRGGBB.
    pub background: Color,
    /// Pen width in pixels.
    pub line_width: u32,
    /// Gap between the window edge and the surface in the demo window. The
    /// gap is "page": pointer events there are outside the surface.
    pub page_margin: usize,
    pub window_width: usize,
    pub window_height: usize,
    /// Where the demo writes the PNG when saving.
    pub export_path: String,
    /// When enabled the logger starts at debug level (and honours `RUST_LOG`).
    pub debug_logging: bool,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            ink: Color::BLACK,
            background: Color::WHITE,
            line_width: 2,
            page_margin: 40,
            window_width: 640,
            window_height: 360,
            export_path: "signature.png".into(),
            debug_logging: false,
        }
    }
}

impl PadConfig {
    /// A missing or empty file yields the defaults. Unreadable files, malformed
    /// JSON and out-of-range values are errors.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::Io(format!("{}: {e}", path.display()))),
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.line_width > MAX_LINE_WIDTH {
            return Err(Error::Config(format!(
                "line_width {} is wider than {MAX_LINE_WIDTH}",
                self.line_width
            )));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn renderer(&self) -> Renderer {
        Renderer {
            ink: self.ink,
            background: self.background,
            line_width: self.line_width.min(MAX_LINE_WIDTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: PadConfig = serde_json::from_str(r#"{ "line_width": 5, "ink": 255 }"#).unwrap();
        assert_eq!(cfg.line_width, 5);
        assert_eq!(cfg.ink, Color::rgb(0, 0, 255));
        assert_eq!(cfg.background, Color::WHITE);
        assert_eq!(cfg.export_path, "signature.png");
    }

    #[test]
    fn renderer_takes_pen_settings() {
        let cfg = PadConfig { line_width: 7, ..PadConfig::default() };
        let r = cfg.renderer();
        assert_eq!(r.line_width, 7);
        assert_eq!(r.ink, cfg.ink);
    }

    #[test]
    fn renderer_caps_pen_width() {
        let cfg = PadConfig { line_width: 100_000, ..PadConfig::default() };
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
        assert_eq!(cfg.renderer().line_width, MAX_LINE_WIDTH);
    }
}
