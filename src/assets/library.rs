use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::{decode, raster::RasterImage, svg_raster},
    foundation::error::{FrameError, FrameResult},
};

/// Pixel size SVG icons are rasterized at when loaded.
pub const ICON_RASTER_PX: u32 = 128;

/// Fixed manifest of decorative icons shared by all themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetName {
    /// Heart / like.
    Heart,
    /// Five-point star.
    Star,
    /// Small sparkle glint.
    Sparkle,
    /// Musical note.
    MusicNote,
    /// Play button.
    Play,
    /// Previous-track button.
    Prev,
    /// Next-track button.
    Next,
    /// Shuffle button.
    Shuffle,
    /// Repeat button.
    Repeat,
    /// Round contact avatar.
    Avatar,
    /// Camera glyph.
    Camera,
    /// Read-receipt double check.
    DoubleCheck,
    /// Flower doodle.
    Flower,
    /// Sun doodle.
    Sun,
    /// Cloud doodle.
    Cloud,
    /// Status-bar battery.
    Battery,
    /// Status-bar signal bars.
    Signal,
}

impl AssetName {
    /// Every manifest entry, in manifest order.
    pub const ALL: [AssetName; 17] = [
        AssetName::Heart,
        AssetName::Star,
        AssetName::Sparkle,
        AssetName::MusicNote,
        AssetName::Play,
        AssetName::Prev,
        AssetName::Next,
        AssetName::Shuffle,
        AssetName::Repeat,
        AssetName::Avatar,
        AssetName::Camera,
        AssetName::DoubleCheck,
        AssetName::Flower,
        AssetName::Sun,
        AssetName::Cloud,
        AssetName::Battery,
        AssetName::Signal,
    ];

    /// Symbolic name, also the file stem under `icons/`.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetName::Heart => "heart",
            AssetName::Star => "star",
            AssetName::Sparkle => "sparkle",
            AssetName::MusicNote => "music-note",
            AssetName::Play => "play",
            AssetName::Prev => "prev",
            AssetName::Next => "next",
            AssetName::Shuffle => "shuffle",
            AssetName::Repeat => "repeat",
            AssetName::Avatar => "avatar",
            AssetName::Camera => "camera",
            AssetName::DoubleCheck => "double-check",
            AssetName::Flower => "flower",
            AssetName::Sun => "sun",
            AssetName::Cloud => "cloud",
            AssetName::Battery => "battery",
            AssetName::Signal => "signal",
        }
    }

    /// Look up a manifest entry by its symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == name)
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw font bytes used for all theme text.
#[derive(Clone)]
pub struct FontAsset {
    bytes: Arc<Vec<u8>>,
}

impl FontAsset {
    /// Wrap font file bytes (TTF/OTF/TTC). The font is parsed lazily by the text engine.
    pub fn from_bytes(bytes: Vec<u8>) -> FrameResult<Self> {
        if bytes.is_empty() {
            return Err(FrameError::decode("font bytes are empty"));
        }
        Ok(Self {
            bytes: Arc::new(bytes),
        })
    }

    /// Font file bytes.
    pub fn bytes(&self) -> &Arc<Vec<u8>> {
        &self.bytes
    }
}

impl fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontAsset")
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

/// Read-only store of decorative icons and the text font.
///
/// Populated once, then shared by reference. Entries that failed to load are simply absent;
/// renderers skip the corresponding visual.
#[derive(Clone, Debug, Default)]
pub struct AssetLibrary {
    icons: HashMap<AssetName, RasterImage>,
    font: Option<FontAsset>,
}

impl AssetLibrary {
    /// Library with no icons and no font. Every theme still renders.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the fixed manifest from `root`.
    ///
    /// Icons are read from `icons/<name>.png`, falling back to `icons/<name>.svg`. The first
    /// `.ttf`/`.otf`/`.ttc` file under `fonts/` becomes the text font. Nothing here fails: every
    /// load error is logged and recorded as an absent entry.
    pub fn load_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let mut out = Self::empty();

        for name in AssetName::ALL {
            match load_icon(root, name) {
                Ok(Some(img)) => {
                    out.icons.insert(name, img);
                }
                Ok(None) => {
                    tracing::warn!(asset = %name, root = %root.display(), "icon not found");
                }
                Err(e) => {
                    tracing::warn!(asset = %name, error = %e, "icon failed to load");
                }
            }
        }

        match load_first_font(&root.join("fonts")) {
            Ok(Some(font)) => out.font = Some(font),
            Ok(None) => tracing::warn!(root = %root.display(), "no font found; text is skipped"),
            Err(e) => tracing::warn!(error = %e, "font failed to load; text is skipped"),
        }

        tracing::debug!(
            icons = out.icons.len(),
            font = out.font.is_some(),
            "asset library loaded"
        );
        out
    }

    /// Return a copy with `image` registered under `name`.
    pub fn with_icon(mut self, name: AssetName, image: RasterImage) -> Self {
        self.icons.insert(name, image);
        self
    }

    /// Return a copy without the icon `name` (simulates a failed load).
    pub fn without_icon(mut self, name: AssetName) -> Self {
        self.icons.remove(&name);
        self
    }

    /// Return a copy using `font` for text.
    pub fn with_font(mut self, font: FontAsset) -> Self {
        self.font = Some(font);
        self
    }

    /// Icon registered under `name`, if it loaded.
    pub fn get(&self, name: AssetName) -> Option<&RasterImage> {
        self.icons.get(&name)
    }

    /// Icon registered under a symbolic name string.
    pub fn get_by_name(&self, name: &str) -> Option<&RasterImage> {
        AssetName::from_name(name).and_then(|n| self.get(n))
    }

    /// Text font, if one loaded.
    pub fn font(&self) -> Option<&FontAsset> {
        self.font.as_ref()
    }

    /// Number of icons present.
    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }
}

fn icon_path(root: &Path, name: AssetName, ext: &str) -> PathBuf {
    root.join("icons").join(format!("{}.{ext}", name.as_str()))
}

fn load_icon(root: &Path, name: AssetName) -> FrameResult<Option<RasterImage>> {
    let png = icon_path(root, name, "png");
    if png.is_file() {
        let bytes = std::fs::read(&png)
            .with_context(|| format!("read icon '{}'", png.display()))?;
        return decode::decode_image(&bytes).map(Some);
    }

    let svg = icon_path(root, name, "svg");
    if svg.is_file() {
        let bytes = std::fs::read(&svg)
            .with_context(|| format!("read icon '{}'", svg.display()))?;
        let tree = decode::parse_svg(&bytes)?;
        return svg_raster::rasterize_svg(&tree, ICON_RASTER_PX).map(Some);
    }

    Ok(None)
}

fn load_first_font(dir: &Path) -> FrameResult<Option<FontAsset>> {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return Ok(None);
    };

    let mut candidates: Vec<PathBuf> = rd
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|s| s.to_str())
                .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"))
                .unwrap_or(false)
        })
        .collect();
    // read_dir order is platform-dependent.
    candidates.sort();

    let Some(path) = candidates.into_iter().next() else {
        return Ok(None);
    };
    let bytes =
        std::fs::read(&path).with_context(|| format!("read font '{}'", path.display()))?;
    FontAsset::from_bytes(bytes).map(Some)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/library.rs"]
mod tests;
