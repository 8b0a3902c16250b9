//! Make the light background of an image transparent.
//!
//! Every pixel whose red, green and blue channels are all above a threshold
//! (200 by default) is replaced with transparent white; everything else is
//! kept as is. The result is always written PNG-encoded.

mod converter;
mod pipeline;

pub mod formats;
pub mod output;
pub mod processing;
pub mod types;

pub use converter::BackgroundKeyer;
pub use types::{
    KeyConfig, KeyStats, KeyedImage, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_THRESHOLD,
    TRANSPARENT_WHITE,
};
