//! Packing a source image into a multi-size Windows ICO.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::DynamicImage;
use image::imageops::FilterType;

use crate::error::IconError;

/// Sizes embedded in the ICO, smallest first.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// One entry as found in an existing ICO file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoEntryInfo {
    pub width: u32,
    pub height: u32,
    pub is_png: bool,
}

/// Build an icon directory from `image`.
///
/// Sizes in [`ICO_SIZES`] larger than the source's shorter side are skipped,
/// so the source is never upscaled. Returns the directory and the sizes it holds.
pub fn build_icon_dir(image: &DynamicImage) -> Result<(IconDir, Vec<u32>), IconError> {
    let limit = image.width().min(image.height());
    let sizes: Vec<u32> = ICO_SIZES.into_iter().filter(|&s| s <= limit).collect();
    if sizes.is_empty() {
        return Err(IconError::SourceTooSmall {
            path: None,
            size: limit,
            min: ICO_SIZES[0],
        });
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for &size in &sizes {
        let resized = image.resize_exact(size, size, FilterType::Lanczos3);
        let icon_image = IconImage::from_rgba_data(size, size, resized.to_rgba8().into_raw());
        let entry = IconDirEntry::encode(&icon_image)
            .map_err(|e| IconError::IcoEncode { size, source: e })?;
        icon_dir.add_entry(entry);
    }

    Ok((icon_dir, sizes))
}

/// Load `input` and write it to `output` as a multi-size ICO.
///
/// Returns the sizes embedded.
pub fn pack_ico(input: &Path, output: &Path) -> Result<Vec<u32>, IconError> {
    let image = image::open(input).map_err(|e| IconError::ImageLoad {
        path: input.to_path_buf(),
        source: e,
    })?;

    let (icon_dir, sizes) = build_icon_dir(&image).map_err(|e| match e {
        IconError::SourceTooSmall { size, min, .. } => IconError::SourceTooSmall {
            path: Some(input.to_path_buf()),
            size,
            min,
        },
        other => other,
    })?;

    let io_err = |e| IconError::Io {
        path: output.to_path_buf(),
        source: e,
    };
    let file = File::create(output).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    icon_dir.write(&mut writer).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    Ok(sizes)
}

/// List the entries of an existing ICO file.
pub fn read_ico_entries(path: &Path) -> Result<Vec<IcoEntryInfo>, IconError> {
    let decode_err = |e| IconError::IcoDecode {
        path: path.to_path_buf(),
        source: e,
    };
    let file = File::open(path).map_err(decode_err)?;
    let icon_dir = IconDir::read(BufReader::new(file)).map_err(decode_err)?;

    Ok(icon_dir
        .entries()
        .iter()
        .map(|entry| IcoEntryInfo {
            width: entry.width(),
            height: entry.height(),
            is_png: entry.is_png(),
        })
        .collect())
}

/// Entry dimensions of an existing ICO file.
pub fn read_ico_sizes(path: &Path) -> Result<Vec<(u32, u32)>, IconError> {
    Ok(read_ico_entries(path)?
        .into_iter()
        .map(|e| (e.width, e.height))
        .collect())
}
