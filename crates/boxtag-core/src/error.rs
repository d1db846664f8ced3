use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for icon rendering and packing.
#[derive(Debug)]
pub enum IconError {
    InvalidCanvas { size: u32, reason: String },
    ImageLoad { path: PathBuf, source: image::ImageError },
    /// Source image is smaller than the smallest ICO entry. `path` is set when
    /// the image was loaded from a file.
    SourceTooSmall { path: Option<PathBuf>, size: u32, min: u32 },
    ImageSave { path: PathBuf, source: image::ImageError },
    IcoEncode { size: u32, source: io::Error },
    IcoDecode { path: PathBuf, source: io::Error },
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::InvalidCanvas { size, reason } => {
                write!(f, "invalid canvas size {}: {}", size, reason)
            }
            IconError::ImageLoad { path, source } => {
                write!(f, "failed to load image '{}': {}", path.display(), source)
            }
            IconError::SourceTooSmall { path: Some(path), size, min } => write!(
                f,
                "source image '{}' is {} px, smaller than the smallest icon size ({})",
                path.display(),
                size,
                min
            ),
            IconError::SourceTooSmall { path: None, size, min } => write!(
                f,
                "source image is {} px, smaller than the smallest icon size ({})",
                size, min
            ),
            IconError::ImageSave { path, source } => {
                write!(f, "failed to save image '{}': {}", path.display(), source)
            }
            IconError::IcoEncode { size, source } => {
                write!(f, "failed to encode icon at size {}: {}", size, source)
            }
            IconError::IcoDecode { path, source } => {
                write!(f, "failed to read icon '{}': {}", path.display(), source)
            }
            IconError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::InvalidCanvas { .. } | IconError::SourceTooSmall { .. } => None,
            IconError::ImageLoad { source, .. } | IconError::ImageSave { source, .. } => Some(source),
            IconError::IcoEncode { source, .. }
            | IconError::IcoDecode { source, .. }
            | IconError::Io { source, .. } => Some(source),
        }
    }
}
