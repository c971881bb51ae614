use crate::{
    assets::library::{AssetLibrary, AssetName},
    foundation::core::{Rgba8, xywh},
    layout::grid::distribute,
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{Theme, ThemeId, chrome},
};

pub(crate) const THEME: Theme = Theme {
    id: ThemeId::Magazine,
    display_name: "Magazine Cover",
    canvas_width: 1080,
    canvas_height: 1440,
};

const MASTHEAD: Rgba8 = Rgba8::hex(0xe63946);
const SHADE: Rgba8 = Rgba8::rgba(0, 0, 0, 110);
const GAP: f64 = 6.0;
const TOP_BAND: f64 = 240.0;
const BOTTOM_BAND: f64 = 260.0;
const COVER_LINES: [&str; 3] = [
    "INSIDE THE BOOTH",
    "50 poses that never fail",
    "Friends, flashes and fame",
];

pub(crate) fn render(s: &mut dyn DrawingSurface, photos: &PhotoSet, assets: &AssetLibrary) {
    let width = f64::from(THEME.canvas_width);
    let height = f64::from(THEME.canvas_height);
    chrome::background(s, &THEME, Rgba8::BLACK);

    distribute(
        s,
        photos.as_slice(),
        photos.len(),
        chrome::canvas_rect(&THEME),
        GAP,
    );

    s.fill_rect(xywh(0.0, 0.0, width, TOP_BAND), SHADE);
    s.fill_rect(xywh(0.0, height - BOTTOM_BAND, width, BOTTOM_BAND), SHADE);

    chrome::centered_text(s, "SNAP", 0.0, 30.0, width, 160.0, MASTHEAD);
    chrome::text(s, "ISSUE 07 / THE PHOTO ISSUE", 60.0, 200.0, 22.0, Rgba8::WHITE);
    chrome::icon(s, assets, AssetName::Star, xywh(960.0, 40.0, 64.0, 64.0));

    let mut y = height - BOTTOM_BAND + 30.0;
    for (i, line) in COVER_LINES.iter().enumerate() {
        let size = if i == 0 { 48.0 } else { 30.0 };
        chrome::text(s, line, 60.0, y, size, Rgba8::WHITE);
        y += f64::from(size) + 18.0;
    }
    chrome::icon(
        s,
        assets,
        AssetName::Sparkle,
        xywh(640.0, height - BOTTOM_BAND + 30.0, 48.0, 48.0),
    );

    let code = xywh(820.0, height - 200.0, 200.0, 140.0);
    s.fill_rect(code, Rgba8::WHITE);
    chrome::barcode(
        s,
        xywh(code.x0 + 15.0, code.y0 + 15.0, code.width() - 30.0, 90.0),
        7,
        Rgba8::BLACK,
    );
    chrome::text(s, "0 71486 02715 4", code.x0 + 20.0, code.y0 + 110.0, 16.0, Rgba8::BLACK);
}
