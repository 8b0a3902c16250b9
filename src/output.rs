use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ImageBuffer, Rgba};

use crate::types::KeyedImage;

/// Write `image` to `path` as PNG. The extension of `path` is not consulted,
/// so a `.jpg` name still receives PNG bytes.
pub fn save_png<P: AsRef<Path>>(image: &KeyedImage, path: P) -> Result<()> {
    let path = path.as_ref();

    let is_png_name = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if !is_png_name {
        log::warn!("writing PNG data to {}", path.display());
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut output = BufWriter::new(file);

    write_png(image, &mut output)?;

    output
        .flush()
        .with_context(|| format!("Failed to flush output file {}", path.display()))?;

    Ok(())
}

/// Encode `image` as PNG into memory.
pub fn encode_png(image: &KeyedImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_png(image, &mut bytes)?;
    Ok(bytes)
}

fn write_png<W: Write>(image: &KeyedImage, writer: W) -> Result<()> {
    let img_buffer: ImageBuffer<Rgba<u8>, &[u8]> = ImageBuffer::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.data(),
    )
    .context("Failed to create image buffer from keyed data")?;

    let encoder = PngEncoder::new(writer);
    img_buffer
        .write_with_encoder(encoder)
        .context("Failed to encode PNG")?;

    Ok(())
}
