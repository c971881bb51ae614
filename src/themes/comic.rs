use crate::{
    assets::library::{AssetLibrary, AssetName},
    foundation::core::{Rgba8, xywh},
    layout::grid::grid_slots,
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{Theme, ThemeId, chrome},
};

pub(crate) const THEME: Theme = Theme {
    id: ThemeId::Comic,
    display_name: "Comic",
    canvas_width: 1200,
    canvas_height: 1600,
};

const PAGE: Rgba8 = Rgba8::hex(0xffe14d);
const DOTS: Rgba8 = Rgba8::hex(0xf4b400);
const BANNER: Rgba8 = Rgba8::hex(0xd7263d);

const DOT_PITCH: f64 = 24.0;
const DOT_SIZE: f64 = 8.0;
const PANEL_STROKE: f64 = 8.0;
const GAP: f64 = 24.0;

pub(crate) fn render(s: &mut dyn DrawingSurface, photos: &PhotoSet, assets: &AssetLibrary) {
    let width = f64::from(THEME.canvas_width);
    let height = f64::from(THEME.canvas_height);
    chrome::background(s, &THEME, PAGE);

    // Halftone, offset on odd rows.
    let mut row = 0;
    let mut y = 0.0;
    while y < height {
        let mut x = if row % 2 == 0 { 0.0 } else { DOT_PITCH / 2.0 };
        while x < width {
            s.fill_ellipse(xywh(x, y, DOT_SIZE, DOT_SIZE), DOTS);
            x += DOT_PITCH;
        }
        y += DOT_PITCH;
        row += 1;
    }

    let banner = xywh(40.0, 40.0, width - 80.0, 140.0);
    s.fill_rect(banner, BANNER);
    s.stroke_rect(banner, Rgba8::BLACK, PANEL_STROKE);
    chrome::centered_text(s, "BOOTH HEROES", banner.x0, 62.0, banner.width(), 84.0, Rgba8::WHITE);
    chrome::icon(s, assets, AssetName::Sparkle, xywh(70.0, 70.0, 80.0, 80.0));
    chrome::icon(s, assets, AssetName::Star, xywh(width - 150.0, 70.0, 80.0, 80.0));

    let panels = grid_slots(photos.len(), xywh(40.0, 210.0, 1120.0, 1350.0), GAP);
    for (i, panel) in panels.iter().enumerate() {
        s.fill_rect(*panel, Rgba8::WHITE);
        chrome::photo(s, photos, i, *panel);
        s.stroke_rect(*panel, Rgba8::BLACK, PANEL_STROKE);
    }

    if let Some(first) = panels.first() {
        let bubble = xywh(first.x1 - 260.0, first.y0 + 30.0, 220.0, 120.0);
        s.fill_ellipse(bubble, Rgba8::WHITE);
        s.stroke_ellipse(bubble, Rgba8::BLACK, 5.0);
        let (x, y) = (bubble.x0, bubble.y0 + 34.0);
        chrome::centered_text(s, "WOW!", x, y, bubble.width(), 48.0, Rgba8::BLACK);
    }
}
