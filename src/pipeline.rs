use std::path::Path;

use anyhow::Result;

use crate::formats;
use crate::processing::key;
use crate::types::{KeyConfig, KeyStats, KeyedImage};

pub fn process_image(path: &Path, config: &KeyConfig) -> Result<(KeyedImage, KeyStats)> {
    let mut image = formats::read_image(path)?;
    log::debug!(
        "keying {}x{} image, threshold {}",
        image.width(),
        image.height(),
        config.threshold
    );

    let stats = key::key_image(&mut image, config);
    log::debug!("{} of {} pixels keyed", stats.keyed, stats.pixels);

    Ok((image, stats))
}
