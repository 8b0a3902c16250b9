use rayon::prelude::*;

use crate::types::{KeyConfig, KeyStats, KeyedImage};

/// True when red, green and blue are all strictly above `threshold`.
/// Alpha is not consulted.
#[inline]
pub fn is_light(pixel: [u8; 4], threshold: u8) -> bool {
    pixel[0] > threshold && pixel[1] > threshold && pixel[2] > threshold
}

#[inline]
pub fn key_pixel(pixel: [u8; 4], config: &KeyConfig) -> [u8; 4] {
    if is_light(pixel, config.threshold) {
        config.replacement
    } else {
        pixel
    }
}

/// Key an interleaved RGBA8 buffer in place.
///
/// Pixels are independent, so the buffer is split across the rayon pool;
/// the result is identical to a sequential scan. A trailing partial pixel
/// (length not a multiple of 4) is left as is.
pub fn key_pixels(data: &mut [u8], config: &KeyConfig) -> KeyStats {
    let pixels = data.len() / KeyedImage::CHANNELS;
    let keyed = data
        .par_chunks_exact_mut(KeyedImage::CHANNELS)
        .map(|px| {
            if is_light([px[0], px[1], px[2], px[3]], config.threshold) {
                px.copy_from_slice(&config.replacement);
                1
            } else {
                0
            }
        })
        .sum();

    KeyStats { pixels, keyed }
}

/// Key a pixel sequence into a new vector of the same length and order.
pub fn key_sequence(pixels: &[[u8; 4]], config: &KeyConfig) -> Vec<[u8; 4]> {
    pixels.par_iter().map(|&p| key_pixel(p, config)).collect()
}

pub fn key_image(image: &mut KeyedImage, config: &KeyConfig) -> KeyStats {
    key_pixels(image.data_mut(), config)
}
