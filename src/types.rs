use anyhow::{bail, Result};

/// Channels strictly above this value count as "light".
pub const DEFAULT_THRESHOLD: u8 = 200;

/// Fully transparent white, written over every keyed pixel.
pub const TRANSPARENT_WHITE: [u8; 4] = [255, 255, 255, 0];

pub const DEFAULT_INPUT: &str = "src/assets/images/img.jpg";

/// Output keeps the `.jpg` name even though the bytes are PNG.
pub const DEFAULT_OUTPUT: &str = "src/assets/images/img1.jpg";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct KeyConfig {
    /// A pixel is keyed when red, green and blue are all `> threshold`.
    pub threshold: u8,
    /// RGBA value written over keyed pixels.
    pub replacement: [u8; 4],
}

impl Default for KeyConfig {
    fn default() -> Self {
        KeyConfig {
            threshold: DEFAULT_THRESHOLD,
            replacement: TRANSPARENT_WHITE,
        }
    }
}

/// Counters reported by a keying pass.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct KeyStats {
    pub pixels: usize,
    pub keyed: usize,
}

/// Interleaved RGBA8 image, row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeyedImage {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl KeyedImage {
    pub const CHANNELS: usize = 4;

    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width * height * Self::CHANNELS;
        if data.len() != expected {
            bail!(
                "RGBA buffer for {}x{} must hold {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            );
        }
        Ok(KeyedImage { data, width, height })
    }

    pub fn from_pixels(width: usize, height: usize, pixels: &[[u8; 4]]) -> Result<Self> {
        Self::new(width, height, pixels.concat())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * Self::CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(Self::CHANNELS)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_length() {
        assert!(KeyedImage::new(2, 2, vec![0u8; 15]).is_err());
        assert!(KeyedImage::new(2, 2, vec![0u8; 16]).is_ok());
    }

    #[test]
    fn test_empty_image() {
        let img = KeyedImage::new(0, 0, Vec::new()).unwrap();
        assert_eq!(img.pixel_count(), 0);
        assert_eq!(img.pixels().count(), 0);
    }

    #[test]
    fn test_pixel_addressing_is_row_major() {
        let pixels: [[u8; 4]; 4] = [[1, 0, 0, 0], [2, 0, 0, 0], [3, 0, 0, 0], [4, 0, 0, 0]];
        let img = KeyedImage::from_pixels(2, 2, &pixels).unwrap();
        assert_eq!(img.pixel(1, 0)[0], 2);
        assert_eq!(img.pixel(0, 1)[0], 3);
        assert_eq!(img.pixel(1, 1)[0], 4);
    }

    #[test]
    fn test_default_config() {
        let config = KeyConfig::default();
        assert_eq!(config.threshold, 200);
        assert_eq!(config.replacement, [255, 255, 255, 0]);
    }
}
