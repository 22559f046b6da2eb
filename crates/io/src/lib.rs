//! Raster side of the icon generator: loading and normalising the source
//! image, resizing it per size table entry, and writing PNGs plus the iOS
//! asset catalog manifest.

use std::path::PathBuf;
use thiserror::Error;

pub mod generate;
pub mod manifest;
pub mod normalize;

pub use generate::{generate_android, generate_ios, GeneratedIcon, IosOutput};
pub use normalize::{crop_origin, load_source, normalize};

pub type Result<T, E = IconError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Source image not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {edge}x{edge} PNG: {source}")]
    Encode {
        edge: u32,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputNotFound,
    Decode,
    Write,
    Unexpected,
}

impl IconError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IconError::InputNotFound(_) => ErrorKind::InputNotFound,
            IconError::Decode { .. } => ErrorKind::Decode,
            IconError::Write { .. } => ErrorKind::Write,
            IconError::Encode { .. } | IconError::Manifest(_) => ErrorKind::Unexpected,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Write { path: path.into(), source }
    }
}
