use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageReader};

use crate::types::KeyedImage;

/// Decode an image file and normalize it to RGBA8.
///
/// The format is sniffed from the content first and the extension second,
/// so anything the enabled decoders understand is accepted.
pub fn read_image(path: &Path) -> Result<KeyedImage> {
    if !is_jpeg(path) {
        log::warn!("{} does not look like a JPEG, decoding anyway", path.display());
    }

    let decoded = ImageReader::open(path)
        .with_context(|| format!("Failed to open input image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read input image {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode input image {}", path.display()))?;

    into_keyed(decoded)
}

/// Decode an in-memory encoded image and normalize it to RGBA8.
pub fn decode_image(bytes: &[u8]) -> Result<KeyedImage> {
    let decoded = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("Failed to read image bytes")?
        .decode()
        .context("Failed to decode image bytes")?;

    into_keyed(decoded)
}

fn into_keyed(decoded: DynamicImage) -> Result<KeyedImage> {
    log::debug!(
        "decoded {}x{} {:?}",
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    let rgba = decoded.into_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    KeyedImage::new(width, height, rgba.into_raw())
}

pub fn is_jpeg(path: &Path) -> bool {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            return true;
        }
    }
    // SOI marker followed by the first segment marker
    if let Ok(mut f) = File::open(path) {
        let mut sig = [0u8; 3];
        if f.read_exact(&mut sig).is_ok() && sig == [0xFF, 0xD8, 0xFF] {
            return true;
        }
    }
    false
}
