use crate::{
    assets::library::AssetLibrary,
    foundation::core::{Rect, Rgba8, xywh},
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{Theme, ThemeId, chrome},
};

pub(crate) const THEME: Theme = Theme {
    id: ThemeId::Filmstrip,
    display_name: "Film Strip",
    canvas_width: 700,
    canvas_height: 1200,
};

const FILM: Rgba8 = Rgba8::hex(0x111111);
const HOLE: Rgba8 = Rgba8::hex(0xeeeeee);
const LABEL: Rgba8 = Rgba8::hex(0xf5a623);

const HOLE_W: f64 = 30.0;
const HOLE_H: f64 = 20.0;
const HOLE_PITCH: f64 = 50.0;
const HOLE_MARGIN: f64 = 20.0;
const FRAME_X: f64 = 80.0;
const FRAME_TOP: f64 = 60.0;
const FRAME_BOTTOM: f64 = 60.0;
const FRAME_GAP: f64 = 30.0;

/// Photo frames stacked top to bottom, every frame spanning the strip width.
pub(crate) fn frame_rects(count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    let w = f64::from(THEME.canvas_width) - FRAME_X * 2.0;
    let avail = f64::from(THEME.canvas_height) - FRAME_TOP - FRAME_BOTTOM;
    let h = (avail - FRAME_GAP * (n - 1.0)) / n;
    (0..count)
        .map(|i| xywh(FRAME_X, FRAME_TOP + i as f64 * (h + FRAME_GAP), w, h))
        .collect()
}

pub(crate) fn render(s: &mut dyn DrawingSurface, photos: &PhotoSet, _assets: &AssetLibrary) {
    chrome::background(s, &THEME, FILM);

    let width = f64::from(THEME.canvas_width);
    let mut y = HOLE_MARGIN;
    while y + HOLE_H <= f64::from(THEME.canvas_height) {
        s.fill_rounded_rect(xywh(HOLE_MARGIN, y, HOLE_W, HOLE_H), 4.0, HOLE);
        s.fill_rounded_rect(
            xywh(width - HOLE_MARGIN - HOLE_W, y, HOLE_W, HOLE_H),
            4.0,
            HOLE,
        );
        y += HOLE_PITCH;
    }

    for (i, rect) in frame_rects(photos.len()).into_iter().enumerate() {
        chrome::photo(s, photos, i, rect);
        chrome::text(
            s,
            &format!("{}A", i + 1),
            rect.x1 - 40.0,
            rect.y1 + 4.0,
            18.0,
            LABEL,
        );
    }

    chrome::text(s, "SNAPSHOT 400", FRAME_X, 18.0, 22.0, LABEL);
}
