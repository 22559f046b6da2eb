use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Android launcher icon edge lengths, keyed by mipmap density bucket.
pub const ANDROID_DENSITIES: &[(&str, u32)] = &[
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// File names written into every Android density directory. Both carry the
/// same square image; no circular mask is applied to the round variant.
pub const ANDROID_ICON_NAMES: [&str; 2] = ["ic_launcher.png", "ic_launcher_round.png"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IosIconSize {
    pub name: &'static str,
    pub points: f64,
    pub scale: u32,
}

impl IosIconSize {
    /// Physical edge in pixels; fractional point sizes truncate toward zero.
    pub fn pixels(&self) -> u32 {
        (self.points * self.scale as f64) as u32
    }

    pub fn filename(&self) -> String {
        format!("icon-{}.png", self.name)
    }
}

const fn ios(name: &'static str, points: f64, scale: u32) -> IosIconSize {
    IosIconSize { name, points, scale }
}

pub const IOS_ICON_SIZES: &[IosIconSize] = &[
    // iPhone
    ios("20pt@2x", 20.0, 2),
    ios("20pt@3x", 20.0, 3),
    ios("29pt@2x", 29.0, 2),
    ios("29pt@3x", 29.0, 3),
    ios("40pt@2x", 40.0, 2),
    ios("40pt@3x", 40.0, 3),
    ios("60pt@2x", 60.0, 2),
    ios("60pt@3x", 60.0, 3),
    // iPad
    ios("20pt@1x", 20.0, 1),
    ios("29pt@1x", 29.0, 1),
    ios("40pt@1x", 40.0, 1),
    ios("76pt@1x", 76.0, 1),
    ios("76pt@2x", 76.0, 2),
    ios("83.5pt@2x", 83.5, 2),
    // App Store
    ios("1024pt@1x", 1024.0, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Android, Platform::Ios];

    /// Directory holding this platform's icons, relative to the output root.
    /// Android icons go one level deeper, into a per-density directory.
    pub fn base_dir(&self) -> PathBuf {
        match self {
            Platform::Android => ["android", "app", "src", "main", "res"].iter().collect(),
            Platform::Ios => ["ios", "Runner", "Assets.xcassets", "AppIcon.appiconset"]
                .iter()
                .collect(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => f.write_str("Android"),
            Platform::Ios => f.write_str("iOS"),
        }
    }
}

/// One planned output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub platform: Platform,
    /// Density bucket (Android) or size name (iOS).
    pub key: &'static str,
    pub edge: u32,
    /// Path relative to the output root.
    pub path: PathBuf,
}

/// Every file a platform produces, in table order.
pub fn plan(platform: Platform) -> Vec<IconSpec> {
    let base = platform.base_dir();
    match platform {
        Platform::Android => ANDROID_DENSITIES
            .iter()
            .flat_map(|&(density, edge)| {
                let dir = base.join(density);
                ANDROID_ICON_NAMES.iter().map(move |name| IconSpec {
                    platform,
                    key: density,
                    edge,
                    path: dir.join(name),
                })
            })
            .collect(),
        Platform::Ios => IOS_ICON_SIZES
            .iter()
            .map(|size| IconSpec {
                platform,
                key: size.name,
                edge: size.pixels(),
                path: base.join(size.filename()),
            })
            .collect(),
    }
}

pub const CONTENTS_FILE: &str = "Contents.json";

/// `Contents.json` of an Xcode app icon set.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppIconContents {
    pub images: Vec<ContentsImage>,
    pub info: ContentsInfo,
}

impl AppIconContents {
    /// One image entry per row of [`IOS_ICON_SIZES`], in table order.
    pub fn from_table() -> Self {
        Self {
            images: IOS_ICON_SIZES.iter().map(ContentsImage::for_size).collect(),
            info: ContentsInfo::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContentsImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

impl ContentsImage {
    pub fn for_size(size: &IosIconSize) -> Self {
        // f64 Display drops a zero fraction: 20.0 -> "20", 83.5 -> "83.5"
        let points = size.points;
        Self {
            filename: size.filename(),
            idiom: "universal".into(),
            scale: format!("{}x", size.scale),
            size: format!("{points}x{points}"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContentsInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ContentsInfo {
    fn default() -> Self {
        Self { author: "xcode".into(), version: 1 }
    }
}
