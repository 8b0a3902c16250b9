use std::path::Path;

use anyhow::{Context, Result};

use crate::output;
use crate::pipeline;
use crate::types::{KeyConfig, KeyStats, KeyedImage};

/// Loads an image, keys its light background out and writes it as PNG.
pub struct BackgroundKeyer {
    config: KeyConfig,
}

impl BackgroundKeyer {
    pub fn new() -> Self {
        BackgroundKeyer {
            config: KeyConfig::default(),
        }
    }

    pub fn with_config(mut self, config: KeyConfig) -> Self {
        self.config = config;
        self
    }

    /// Decode and key an image without writing anything to disk.
    pub fn process<P: AsRef<Path>>(&self, input_path: P) -> Result<KeyedImage> {
        let (image, _) = pipeline::process_image(input_path.as_ref(), &self.config)
            .context("Image processing failed")?;
        Ok(image)
    }

    /// Decode and key `input_path`, then save the result as PNG at `output_path`.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<KeyStats> {
        let (image, stats) = pipeline::process_image(input_path.as_ref(), &self.config)
            .context("Image processing failed")?;

        output::save_png(&image, output_path.as_ref()).context("Image save failed")?;

        log::info!(
            "{} -> {}: {} of {} pixels made transparent",
            input_path.as_ref().display(),
            output_path.as_ref().display(),
            stats.keyed,
            stats.pixels
        );

        Ok(stats)
    }
}

impl Default for BackgroundKeyer {
    fn default() -> Self {
        Self::new()
    }
}
