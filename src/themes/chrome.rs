//! Decorative building blocks shared by the theme renderers.

use crate::{
    assets::library::{AssetLibrary, AssetName},
    foundation::{
        core::{Point, Rect, Rgba8, xywh},
        math::SplitMix64,
    },
    layout::cover::{place_contain, place_cover},
    photo::PhotoSet,
    render::surface::{DrawingSurface, TextAlign, TextStyle},
    themes::Theme,
};

const FILLER_WORDS: [&str; 24] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "snap", "flash", "booth", "smile", "friends",
    "pose", "weekend", "candid", "exclusive", "sources", "confirm", "late", "night", "city",
    "scene", "spotted", "together", "again", "report",
];

/// Full canvas of `theme` in template pixels.
pub(crate) fn canvas_rect(theme: &Theme) -> Rect {
    theme.canvas().bounds()
}

/// Fill the whole theme canvas.
pub(crate) fn background(s: &mut dyn DrawingSurface, theme: &Theme, color: Rgba8) {
    s.fill_rect(canvas_rect(theme), color);
}

/// Draw icon `name` letterboxed in `rect`; absent icons are skipped.
pub(crate) fn icon(s: &mut dyn DrawingSurface, assets: &AssetLibrary, name: AssetName, rect: Rect) {
    match assets.get(name) {
        Some(img) => place_contain(s, img, rect),
        None => tracing::trace!(asset = %name, "icon absent; skipped"),
    }
}

/// Cover-fit photo `index` into `rect` if the set has it.
pub(crate) fn photo(s: &mut dyn DrawingSurface, photos: &PhotoSet, index: usize, rect: Rect) {
    if let Some(img) = photos.get(index) {
        place_cover(s, img, rect);
    }
}

/// Cover-fit photo `index` into `rect`, clipped to rounded corners.
pub(crate) fn rounded_photo(
    s: &mut dyn DrawingSurface,
    photos: &PhotoSet,
    index: usize,
    rect: Rect,
    radius: f64,
) {
    if photos.get(index).is_none() {
        return;
    }
    s.push_clip(rect, radius);
    photo(s, photos, index, rect);
    s.pop_clip();
}

/// Single line of text centered horizontally inside `[x, x + width]`.
pub(crate) fn centered_text(
    s: &mut dyn DrawingSurface,
    text: &str,
    x: f64,
    y: f64,
    width: f64,
    size_px: f32,
    color: Rgba8,
) {
    let style = TextStyle::new(size_px, color).aligned(TextAlign::Center, width);
    s.draw_text(text, Point::new(x, y), &style);
}

/// Left-aligned text at `(x, y)`.
pub(crate) fn text(
    s: &mut dyn DrawingSurface,
    text: &str,
    x: f64,
    y: f64,
    size_px: f32,
    color: Rgba8,
) {
    s.draw_text(text, Point::new(x, y), &TextStyle::new(size_px, color));
}

/// Deterministic filler sentences: `lines` lines of at most `max_chars` characters each.
pub(crate) fn filler_lines(seed: u64, lines: usize, max_chars: usize) -> Vec<String> {
    let mut rng = SplitMix64::new(seed);
    let mut out = Vec::with_capacity(lines);
    for _ in 0..lines {
        let mut line = String::new();
        loop {
            let word = FILLER_WORDS[rng.range(0, FILLER_WORDS.len() as u32) as usize];
            let extra = if line.is_empty() { word.len() } else { word.len() + 1 };
            if line.len() + extra > max_chars {
                break;
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        out.push(line);
    }
    out
}

/// Vertical-bar barcode filling `rect`.
pub(crate) fn barcode(s: &mut dyn DrawingSurface, rect: Rect, seed: u64, color: Rgba8) {
    let mut rng = SplitMix64::new(seed);
    let mut x = rect.x0;
    while x < rect.x1 {
        let bar = f64::from(rng.range(1, 5));
        let space = f64::from(rng.range(1, 4));
        let w = bar.min(rect.x1 - x);
        s.fill_rect(xywh(x, rect.y0, w, rect.height()), color);
        x += bar + space;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/themes/chrome.rs"]
mod tests;
