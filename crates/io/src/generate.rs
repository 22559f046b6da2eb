use crate::manifest::write_contents;
use crate::{IconError, Result};
use icon_types::{
    plan, AppIconContents, ContentsImage, ContentsInfo, IconSpec, Platform, ANDROID_ICON_NAMES,
    IOS_ICON_SIZES,
};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ColorType, ImageEncoder, RgbImage};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// A file written by one of the platform generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub platform: Platform,
    pub path: PathBuf,
    pub edge: u32,
}

#[derive(Debug)]
pub struct IosOutput {
    pub icons: Vec<GeneratedIcon>,
    pub manifest: PathBuf,
    pub contents: AppIconContents,
}

/// Lanczos3 keeps strong downscales (1024 -> 20) free of aliasing.
pub fn resize_square(img: &RgbImage, edge: u32) -> RgbImage {
    imageops::resize(img, edge, edge, FilterType::Lanczos3)
}

/// Lossless PNG with maximum compression. Output is deterministic for a
/// given image.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    let mut buf = Vec::new();
    PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive)
        .write_image(img.as_raw(), width, height, ColorType::Rgb8)
        .map_err(|source| IconError::Encode { edge: width, source })?;
    Ok(buf)
}

/// Write `bytes` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_icon(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| IconError::write(dir, e))?;
    }
    std::fs::write(path, bytes).map_err(|e| IconError::write(path, e))
}

fn render(img: &RgbImage, edge: u32) -> Result<Vec<u8>> {
    encode_png(&resize_square(img, edge))
}

fn emit(out_root: &Path, spec: &IconSpec, bytes: &[u8]) -> Result<GeneratedIcon> {
    let path = out_root.join(&spec.path);
    write_icon(&path, bytes)?;
    log::debug!("wrote {} ({}x{})", path.display(), spec.edge, spec.edge);
    Ok(GeneratedIcon { platform: spec.platform, path, edge: spec.edge })
}

/// Results come back indexed by table position; the first failing entry in
/// table order is reported. Entries that already succeeded stay on disk.
fn in_table_order<T>(results: Vec<Result<T>>) -> Result<Vec<T>> {
    results.into_iter().collect()
}

/// Write `ic_launcher.png` and `ic_launcher_round.png` for every density.
pub fn generate_android(img: &RgbImage, out_root: &Path) -> Result<Vec<GeneratedIcon>> {
    log::info!("generating {} icons under {}", Platform::Android, out_root.display());
    let specs = plan(Platform::Android);
    // plan() lists both file names of a density back to back
    let results: Vec<Result<Vec<GeneratedIcon>>> = specs
        .par_chunks(ANDROID_ICON_NAMES.len())
        .map(|density| -> Result<Vec<GeneratedIcon>> {
            let bytes = render(img, density[0].edge)?;
            density.iter().map(|spec| emit(out_root, spec, &bytes)).collect()
        })
        .collect();
    Ok(in_table_order(results)?.into_iter().flatten().collect())
}

/// Write one `icon-<size>.png` per size table row, then `Contents.json`.
pub fn generate_ios(img: &RgbImage, out_root: &Path) -> Result<IosOutput> {
    log::info!("generating {} icons under {}", Platform::Ios, out_root.display());
    let results: Vec<Result<(GeneratedIcon, ContentsImage)>> = plan(Platform::Ios)
        .into_par_iter()
        .zip(IOS_ICON_SIZES.par_iter())
        .map(|(spec, size)| -> Result<(GeneratedIcon, ContentsImage)> {
            let bytes = render(img, spec.edge)?;
            let icon = emit(out_root, &spec, &bytes)?;
            Ok((icon, ContentsImage::for_size(size)))
        })
        .collect();
    let (icons, images): (Vec<_>, Vec<_>) = in_table_order(results)?.into_iter().unzip();

    let contents = AppIconContents { images, info: ContentsInfo::default() };
    let manifest = write_contents(&out_root.join(Platform::Ios.base_dir()), &contents)?;
    Ok(IosOutput { icons, manifest, contents })
}
