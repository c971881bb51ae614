use crate::{
    assets::library::{AssetLibrary, AssetName},
    foundation::core::{Point, Rect, Rgba8, xywh},
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{Theme, ThemeId, chrome},
};

pub(crate) const THEME: Theme = Theme {
    id: ThemeId::Player,
    display_name: "Music Player",
    canvas_width: 1080,
    canvas_height: 1350,
};

const BG_TOP: Rgba8 = Rgba8::hex(0x2b1d3f);
const BG_BOTTOM: Rgba8 = Rgba8::hex(0x120c1c);
const FG: Rgba8 = Rgba8::WHITE;
const MUTED: Rgba8 = Rgba8::WHITE.with_alpha(150);
const TRACK: Rgba8 = Rgba8::WHITE.with_alpha(60);
const ACCENT: Rgba8 = Rgba8::hex(0x1db954);

const ART: Rect = Rect::new(140.0, 170.0, 940.0, 970.0);
const ART_RADIUS: f64 = 24.0;
const ART_GAP: f64 = 6.0;
const PROGRESS_Y: f64 = 1130.0;
const PROGRESS_SHARE: f64 = 0.37;
const CONTROL_SIZE: f64 = 72.0;
const CONTROLS_Y: f64 = 1215.0;
const CLOCK: &str = "9:41";

/// Album-art tiles: one fills the art square, two stack, three put one tall tile on the
/// left with two stacked on the right, four form a 2x2 grid.
pub(crate) fn player_slots(count: usize, art: Rect, gap: f64) -> Vec<Rect> {
    let (x, y, w, h) = (art.x0, art.y0, art.width(), art.height());
    let half_w = (w - gap) / 2.0;
    let half_h = (h - gap) / 2.0;
    match count {
        1 => vec![art],
        2 => vec![
            xywh(x, y, w, half_h),
            xywh(x, y + half_h + gap, w, half_h),
        ],
        3 => vec![
            xywh(x, y, half_w, h),
            xywh(x + half_w + gap, y, half_w, half_h),
            xywh(x + half_w + gap, y + half_h + gap, half_w, half_h),
        ],
        4 => vec![
            xywh(x, y, half_w, half_h),
            xywh(x + half_w + gap, y, half_w, half_h),
            xywh(x, y + half_h + gap, half_w, half_h),
            xywh(x + half_w + gap, y + half_h + gap, half_w, half_h),
        ],
        _ => Vec::new(),
    }
}

pub(crate) fn render(s: &mut dyn DrawingSurface, photos: &PhotoSet, assets: &AssetLibrary) {
    let width = f64::from(THEME.canvas_width);
    let height = f64::from(THEME.canvas_height);
    s.fill_rect(xywh(0.0, 0.0, width, height / 2.0), BG_TOP);
    s.fill_rect(xywh(0.0, height / 2.0, width, height / 2.0), BG_BOTTOM);

    // Status bar.
    chrome::text(s, CLOCK, 60.0, 30.0, 30.0, FG);
    chrome::icon(s, assets, AssetName::Signal, xywh(900.0, 32.0, 36.0, 28.0));
    chrome::icon(s, assets, AssetName::Battery, xywh(956.0, 32.0, 64.0, 28.0));
    chrome::centered_text(s, "NOW PLAYING", 0.0, 100.0, width, 26.0, MUTED);
    chrome::icon(s, assets, AssetName::MusicNote, xywh(ART.x0, 96.0, 36.0, 36.0));

    s.fill_rounded_rect(ART, ART_RADIUS, TRACK);
    s.push_clip(ART, ART_RADIUS);
    for (i, slot) in player_slots(photos.len(), ART, ART_GAP).into_iter().enumerate() {
        chrome::photo(s, photos, i, slot);
    }
    s.pop_clip();

    let title = match photos.len() {
        1 => "Solo Session",
        2 => "Duet",
        3 => "Trio",
        _ => "Quartet",
    };
    chrome::text(s, title, ART.x0, 1000.0, 48.0, FG);
    chrome::text(s, "The Photo Booth", ART.x0, 1062.0, 30.0, MUTED);
    chrome::icon(s, assets, AssetName::Heart, xywh(ART.x1 - 56.0, 1010.0, 56.0, 56.0));

    let bar = xywh(ART.x0, PROGRESS_Y, ART.width(), 6.0);
    s.fill_rounded_rect(bar, 3.0, TRACK);
    let played = bar.width() * PROGRESS_SHARE;
    s.fill_rounded_rect(xywh(bar.x0, bar.y0, played, bar.height()), 3.0, ACCENT);
    let knob = Point::new(bar.x0 + played, bar.y0 + bar.height() / 2.0);
    s.fill_ellipse(xywh(knob.x - 10.0, knob.y - 10.0, 20.0, 20.0), FG);
    chrome::text(s, "1:12", bar.x0, PROGRESS_Y + 18.0, 22.0, MUTED);
    chrome::text(s, "3:15", bar.x1 - 50.0, PROGRESS_Y + 18.0, 22.0, MUTED);

    let controls = [
        AssetName::Shuffle,
        AssetName::Prev,
        AssetName::Play,
        AssetName::Next,
        AssetName::Repeat,
    ];
    let step = (ART.width() - CONTROL_SIZE) / (controls.len() - 1) as f64;
    for (i, name) in controls.into_iter().enumerate() {
        let x = ART.x0 + i as f64 * step;
        let rect = xywh(x, CONTROLS_Y, CONTROL_SIZE, CONTROL_SIZE);
        if name == AssetName::Play {
            s.fill_ellipse(rect.inflate(12.0, 12.0), FG);
        }
        chrome::icon(s, assets, name, rect);
    }
}
