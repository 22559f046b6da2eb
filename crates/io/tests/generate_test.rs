use icon_io::manifest::write_contents;
use icon_io::{generate_android, generate_ios, load_source, normalize, ErrorKind};
use icon_types::{AppIconContents, Platform, ANDROID_DENSITIES, IOS_ICON_SIZES};
use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Navy to purple gradient with a white band, similar to a placeholder icon.
fn gradient(width: u32, height: u32) -> RgbaImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let t = y as f32 / (height - 1) as f32;
        if x % 64 < 8 {
            Rgba([250, 250, 250, 255])
        } else {
            Rgba([(60.0 + 80.0 * t) as u8, (70.0 - 20.0 * t) as u8, (110.0 + 80.0 * t) as u8, 200])
        }
    })
}

fn save_source(dir: &Path, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join("source.png");
    gradient(width, height).save(&path).unwrap();
    path
}

fn dims(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}

#[test]
fn test_android_layout_and_sizes() {
    let out = tempfile::tempdir().unwrap();
    let img = normalize(&DynamicImage::ImageRgba8(gradient(256, 256)));
    let icons = generate_android(&img, out.path()).unwrap();
    assert_eq!(icons.len(), 10);

    for (density, edge) in ANDROID_DENSITIES {
        let dir = out.path().join("android/app/src/main/res").join(density);
        let square = dir.join("ic_launcher.png");
        let round = dir.join("ic_launcher_round.png");
        assert_eq!(dims(&square), (*edge, *edge));
        assert_eq!(dims(&round), (*edge, *edge));
        assert_eq!(std::fs::read(&square).unwrap(), std::fs::read(&round).unwrap());
    }
    assert!(icons.iter().all(|i| i.platform == Platform::Android));
    assert_eq!(icons[0].edge, 48);
}

#[test]
fn test_ios_icons_and_manifest_order() {
    let out = tempfile::tempdir().unwrap();
    let img = normalize(&DynamicImage::ImageRgba8(gradient(1024, 1024)));
    let ios = generate_ios(&img, out.path()).unwrap();
    assert_eq!(ios.icons.len(), IOS_ICON_SIZES.len());

    let iconset = out.path().join("ios/Runner/Assets.xcassets/AppIcon.appiconset");
    for (size, icon) in IOS_ICON_SIZES.iter().zip(&ios.icons) {
        let path = iconset.join(format!("icon-{}.png", size.name));
        assert_eq!(icon.path, path);
        assert_eq!(dims(&path), (size.pixels(), size.pixels()));
    }
    assert_eq!(dims(&iconset.join("icon-60pt@3x.png")), (180, 180));
    assert_eq!(dims(&iconset.join("icon-83.5pt@2x.png")), (167, 167));

    assert_eq!(ios.manifest, iconset.join("Contents.json"));
    let written: AppIconContents =
        serde_json::from_str(&std::fs::read_to_string(&ios.manifest).unwrap()).unwrap();
    assert_eq!(written, AppIconContents::from_table());
    for image in &written.images {
        let scale = image.scale.strip_suffix('x').unwrap();
        assert!(scale.parse::<u32>().is_ok());
        let (w, h) = image.size.split_once('x').unwrap();
        assert_eq!(w, h);
    }
}

#[test]
fn test_non_square_source_is_cropped() {
    let dir = tempfile::tempdir().unwrap();
    let src = save_source(dir.path(), 2000, 1000);
    let img = normalize(&load_source(&src).unwrap());
    assert_eq!(img.dimensions(), (1000, 1000));

    let ios = generate_ios(&img, dir.path()).unwrap();
    let big = ios.icons.last().unwrap();
    assert_eq!(big.edge, 1024);
    assert_eq!(dims(&big.path), (1024, 1024));
}

#[test]
fn test_second_run_is_byte_identical() {
    let out = tempfile::tempdir().unwrap();
    let img = normalize(&DynamicImage::ImageRgba8(gradient(300, 300)));

    let first = generate_android(&img, out.path()).unwrap();
    let before: Vec<Vec<u8>> = first.iter().map(|i| std::fs::read(&i.path).unwrap()).collect();
    let second = generate_android(&img, out.path()).unwrap();
    let after: Vec<Vec<u8>> = second.iter().map(|i| std::fs::read(&i.path).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(before, after);
}

#[test]
fn test_manifest_overwrites_previous() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Contents.json"), "stale").unwrap();
    let path = write_contents(dir.path(), &AppIconContents::from_table()).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("{\n  \"images\": ["));
    assert!(text.contains("\"author\": \"xcode\""));
}

#[test]
fn test_undecodable_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not an image").unwrap();
    let err = load_source(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_unwritable_output_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("occupied");
    std::fs::write(&root, b"file, not a directory").unwrap();
    let img = normalize(&DynamicImage::ImageRgba8(gradient(64, 64)));
    let err = generate_android(&img, &root).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Write);
}
