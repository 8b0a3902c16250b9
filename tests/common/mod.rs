use std::io::Cursor;
use std::path::PathBuf;

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};

/// Unique path in the system temp dir; removed on drop.
pub struct TempPath(pub PathBuf);

impl TempPath {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("whitekey-{}-{}", process_tag(), name));
        let _ = std::fs::remove_file(&path);
        TempPath(path)
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn process_tag() -> String {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!(
        "{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    )
}

pub fn write_png(image: RgbaImage, path: &TempPath) {
    image.save_with_format(&path.0, ImageFormat::Png).unwrap();
}

pub fn write_jpeg(image: RgbImage, path: &TempPath) {
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut bytes, ImageFormat::Jpeg)
        .unwrap();
    std::fs::write(&path.0, bytes.into_inner()).unwrap();
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
