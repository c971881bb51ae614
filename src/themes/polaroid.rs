use crate::{
    assets::library::{AssetLibrary, AssetName},
    foundation::core::{Rgba8, xywh},
    layout::grid::distribute,
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{Theme, ThemeId, chrome},
};

pub(crate) const THEME: Theme = Theme {
    id: ThemeId::Polaroid,
    display_name: "Polaroid",
    canvas_width: 900,
    canvas_height: 1100,
};

const BACKDROP: Rgba8 = Rgba8::hex(0xe8dcc8);
const CARD: Rgba8 = Rgba8::hex(0xfdfdfb);
const SHADOW: Rgba8 = Rgba8::rgba(0, 0, 0, 40);
const TAPE: Rgba8 = Rgba8::rgba(255, 255, 240, 170);
const INK: Rgba8 = Rgba8::hex(0x33302c);

const CARD_X: f64 = 90.0;
const CARD_Y: f64 = 80.0;
const CARD_W: f64 = 720.0;
const CARD_H: f64 = 900.0;
const SHADOW_OFFSET: f64 = 12.0;
const BORDER: f64 = 40.0;
const PHOTO_SIDE: f64 = CARD_W - BORDER * 2.0;
const GAP: f64 = 8.0;

pub(crate) fn render(s: &mut dyn DrawingSurface, photos: &PhotoSet, assets: &AssetLibrary) {
    chrome::background(s, &THEME, BACKDROP);

    let card = xywh(CARD_X, CARD_Y, CARD_W, CARD_H);
    s.fill_rect(
        xywh(
            CARD_X + SHADOW_OFFSET,
            CARD_Y + SHADOW_OFFSET,
            CARD_W,
            CARD_H,
        ),
        SHADOW,
    );
    s.fill_rect(card, CARD);

    // Square window with the classic thick bottom margin below it.
    let window = xywh(CARD_X + BORDER, CARD_Y + BORDER, PHOTO_SIDE, PHOTO_SIDE);
    distribute(s, photos.as_slice(), photos.len(), window, GAP);

    let caption_y = window.y1 + 60.0;
    chrome::centered_text(s, "memories", CARD_X, caption_y, CARD_W, 44.0, INK);
    chrome::icon(
        s,
        assets,
        AssetName::Heart,
        xywh(card.x1 - BORDER - 48.0, card.y1 - BORDER - 48.0, 48.0, 48.0),
    );

    s.fill_rect(xywh(CARD_X + CARD_W / 2.0 - 60.0, CARD_Y - 25.0, 120.0, 50.0), TAPE);
}
