//! Writing the full-resolution icon and its down-sampled copies.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use image::imageops::{self, FilterType};

use crate::error::IconError;

/// Down-sampled PNG sizes, written largest first.
pub const PNG_SIZES: [u32; 6] = [512, 256, 128, 64, 32, 16];

/// File name of the full-resolution image.
pub const FULL_ICON_FILENAME: &str = "icon.png";

/// File name for a down-sampled copy, e.g. `icon_64x64.png`.
pub fn sized_filename(size: u32) -> String {
    format!("icon_{}x{}.png", size, size)
}

/// Lanczos-resample to exactly `size` x `size`.
pub fn resize(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.dimensions() == (size, size) {
        return image.clone();
    }
    imageops::resize(image, size, size, FilterType::Lanczos3)
}

/// Save `image` as PNG at `path`.
///
/// The image is encoded in memory first so that a short write surfaces as an error.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    let mut encoded = Cursor::new(Vec::new());
    image
        .write_to(&mut encoded, ImageFormat::Png)
        .map_err(|e| IconError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    fs::write(path, encoded.into_inner()).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Sizes from [`PNG_SIZES`] that fit in an `edge` px image, largest first.
pub fn sizes_for(edge: u32) -> Vec<u32> {
    PNG_SIZES.into_iter().filter(|&s| s <= edge).collect()
}

/// Write `icon.png` plus every size in [`PNG_SIZES`] into `out_dir`.
///
/// Sizes larger than the image's shorter side are skipped, so copies are
/// only ever down-sampled. Creates `out_dir` if needed. Returns the written
/// paths in write order.
pub fn write_icon_set(image: &RgbaImage, out_dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    fs::create_dir_all(out_dir).map_err(|e| IconError::Io {
        path: out_dir.to_path_buf(),
        source: e,
    })?;

    let sizes = sizes_for(image.width().min(image.height()));
    let mut written = Vec::with_capacity(sizes.len() + 1);

    let full_path = out_dir.join(FULL_ICON_FILENAME);
    save_png(image, &full_path)?;
    written.push(full_path);

    for size in sizes {
        let path = out_dir.join(sized_filename(size));
        save_png(&resize(image, size), &path)?;
        written.push(path);
    }

    Ok(written)
}
