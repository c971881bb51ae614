use crate::{
    assets::library::{AssetLibrary, AssetName},
    foundation::core::{Point, Rgba8, xywh},
    layout::grid::grid_slots,
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{Theme, ThemeId, chrome},
};

pub(crate) const THEME: Theme = Theme {
    id: ThemeId::Notebook,
    display_name: "Notebook",
    canvas_width: 1000,
    canvas_height: 1300,
};

const PAGE: Rgba8 = Rgba8::hex(0xfffef7);
const RULE: Rgba8 = Rgba8::hex(0xa7c7e7);
const MARGIN_LINE: Rgba8 = Rgba8::hex(0xe57373);
const HOLE: Rgba8 = Rgba8::hex(0xd9d4c7);
const PENCIL: Rgba8 = Rgba8::hex(0x3b3b58);
const TAPE: Rgba8 = Rgba8::rgba(250, 240, 190, 190);

const FIRST_RULE: f64 = 160.0;
const RULE_PITCH: f64 = 40.0;
const MARGIN_X: f64 = 100.0;
const PHOTO_BORDER: f64 = 10.0;
const GAP: f64 = 40.0;

pub(crate) fn render(s: &mut dyn DrawingSurface, photos: &PhotoSet, assets: &AssetLibrary) {
    let width = f64::from(THEME.canvas_width);
    let height = f64::from(THEME.canvas_height);
    chrome::background(s, &THEME, PAGE);

    let mut y = FIRST_RULE;
    while y < height {
        s.stroke_line(Point::new(0.0, y), Point::new(width, y), RULE, 1.5);
        y += RULE_PITCH;
    }
    s.stroke_line(
        Point::new(MARGIN_X, 0.0),
        Point::new(MARGIN_X, height),
        MARGIN_LINE,
        2.0,
    );
    for hole_y in [200.0, 650.0, 1100.0] {
        s.fill_ellipse(xywh(30.0, hole_y - 20.0, 40.0, 40.0), HOLE);
    }

    chrome::text(s, "Dear diary,", 140.0, 70.0, 54.0, PENCIL);
    chrome::text(s, "today we went to the photo booth!", 440.0, 100.0, 24.0, PENCIL);

    // Slots are laid out like the grid distributor so each photo can carry a white border.
    let area = xywh(140.0, 170.0, 800.0, 1000.0);
    for (i, slot) in grid_slots(photos.len(), area, GAP).into_iter().enumerate() {
        if photos.get(i).is_none() {
            continue;
        }
        s.fill_rect(slot.inflate(4.0, 4.0), Rgba8::rgba(0, 0, 0, 30));
        s.fill_rect(slot, Rgba8::WHITE);
        chrome::photo(s, photos, i, slot.inflate(-PHOTO_BORDER, -PHOTO_BORDER));
        let tape_x = slot.x0 + slot.width() / 2.0 - 50.0;
        s.fill_rect(xywh(tape_x, slot.y0 - 14.0, 100.0, 28.0), TAPE);
    }

    let doodles = [
        (AssetName::Sun, xywh(860.0, 40.0, 90.0, 90.0)),
        (AssetName::Cloud, xywh(720.0, 1190.0, 110.0, 80.0)),
        (AssetName::Flower, xywh(150.0, 1190.0, 80.0, 80.0)),
        (AssetName::Star, xywh(860.0, 1200.0, 60.0, 60.0)),
    ];
    for (name, rect) in doodles {
        chrome::icon(s, assets, name, rect);
    }
}
