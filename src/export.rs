// Export: turn the rendered surface into a PNG (bytes, data URI, or file).
// Only pixels leave here; the stroke log itself is never serialised.

use std::io::Cursor;
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use image::{ImageFormat, RgbImage};

use crate::error::Error;
use crate::types::FrameBuffer;

pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Unpack 0x00RRGGBB pixels into an `image` RGB buffer.
fn to_rgb_image(fb: &FrameBuffer) -> Result<RgbImage, Error> {
    let mut raw = Vec::with_capacity(fb.pixels.len() * 3);
    for &px in &fb.pixels {
        raw.push(((px >> 16) & 0xFF) as u8);
        raw.push(((px >> 8) & 0xFF) as u8);
        raw.push((px & 0xFF) as u8);
    }
    RgbImage::from_raw(fb.width as u32, fb.height as u32, raw)
        .ok_or_else(|| Error::Encode(format!("buffer does not match {}x{}", fb.width, fb.height)))
}

pub fn encode_png(fb: &FrameBuffer) -> Result<Vec<u8>, Error> {
    if fb.width == 0 || fb.height == 0 {
        return Err(Error::Encode("surface has no pixels".into()));
    }
    let img = to_rgb_image(fb)?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::Encode(format!("PNG: {e}")))?;
    Ok(bytes)
}

pub fn to_data_url(fb: &FrameBuffer) -> Result<String, Error> {
    let png = encode_png(fb)?;
    Ok(format!("{DATA_URL_PREFIX}{}", general_purpose::STANDARD.encode(png)))
}

pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    let png = encode_png(fb)?;
    std::fs::write(path, png)?;
    Ok(())
}
