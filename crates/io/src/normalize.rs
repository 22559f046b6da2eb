use crate::{IconError, Result};
use image::{imageops, DynamicImage, RgbImage};
use std::path::Path;

/// Decode the source image from disk.
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(IconError::InputNotFound(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Centred square crop for a `width` x `height` image: `(left, top, edge)`.
pub fn crop_origin(width: u32, height: u32) -> (u32, u32, u32) {
    let edge = width.min(height);
    ((width - edge) / 2, (height - edge) / 2, edge)
}

/// Convert to 8-bit RGB (alpha is dropped) and crop to a centred square.
pub fn normalize(img: &DynamicImage) -> RgbImage {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == height {
        return rgb;
    }
    let (left, top, edge) = crop_origin(width, height);
    log::debug!("cropping {width}x{height} to {edge}x{edge} at ({left}, {top})");
    imageops::crop_imm(&rgb, left, top, edge, edge).to_image()
}
