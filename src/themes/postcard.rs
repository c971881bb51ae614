use crate::{
    assets::library::{AssetLibrary, AssetName},
    foundation::core::{Point, Rgba8, xywh},
    layout::grid::distribute,
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{Theme, ThemeId, chrome},
};

pub(crate) const THEME: Theme = Theme {
    id: ThemeId::Postcard,
    display_name: "Postcard",
    canvas_width: 1500,
    canvas_height: 1000,
};

const CARD: Rgba8 = Rgba8::hex(0xfbf6ea);
const BORDER: Rgba8 = Rgba8::hex(0xc9b99a);
const AIRMAIL_RED: Rgba8 = Rgba8::hex(0xd62828);
const AIRMAIL_BLUE: Rgba8 = Rgba8::hex(0x1d3557);
const INK: Rgba8 = Rgba8::hex(0x2b4a7a);
const POSTMARK: Rgba8 = Rgba8::rgba(60, 60, 60, 140);

const STRIPE_W: f64 = 40.0;
const STRIPE_H: f64 = 14.0;
const PHOTO_AREA: (f64, f64, f64, f64) = (60.0, 70.0, 800.0, 860.0);
const GAP: f64 = 12.0;
const DIVIDER_X: f64 = 920.0;

pub(crate) fn render(s: &mut dyn DrawingSurface, photos: &PhotoSet, assets: &AssetLibrary) {
    let width = f64::from(THEME.canvas_width);
    let height = f64::from(THEME.canvas_height);
    chrome::background(s, &THEME, CARD);

    // Airmail edging along the top and bottom.
    let mut x = 0.0;
    let mut i = 0;
    while x < width {
        let color = if i % 2 == 0 { AIRMAIL_RED } else { AIRMAIL_BLUE };
        s.fill_rect(xywh(x, 0.0, STRIPE_W, STRIPE_H), color);
        s.fill_rect(xywh(x, height - STRIPE_H, STRIPE_W, STRIPE_H), color);
        x += STRIPE_W;
        i += 1;
    }
    s.stroke_rect(xywh(30.0, 40.0, width - 60.0, height - 80.0), BORDER, 2.0);

    let (px, py, pw, ph) = PHOTO_AREA;
    distribute(s, photos.as_slice(), photos.len(), xywh(px, py, pw, ph), GAP);

    s.stroke_line(
        Point::new(DIVIDER_X, 110.0),
        Point::new(DIVIDER_X, height - 110.0),
        BORDER,
        2.0,
    );

    let stamp = xywh(1280.0, 90.0, 150.0, 180.0);
    s.fill_rect(stamp, Rgba8::WHITE);
    s.stroke_rect(stamp.inflate(4.0, 4.0), BORDER, 2.0);
    s.fill_rect(stamp.inflate(-12.0, -12.0), Rgba8::hex(0xf2c6c2));
    chrome::icon(s, assets, AssetName::Flower, stamp.inflate(-24.0, -24.0));
    for r in [0.0, 18.0] {
        let ring = xywh(1150.0 + r, 120.0 + r, 150.0 - r * 2.0, 150.0 - r * 2.0);
        s.stroke_ellipse(ring, POSTMARK, 3.0);
    }
    chrome::centered_text(s, "PHOTO BOOTH", 1150.0, 180.0, 150.0, 16.0, POSTMARK);

    let message = ["Wish you were here!", "Best night ever,", "see you soon."];
    for (i, line) in message.iter().enumerate() {
        chrome::text(s, line, 960.0, 320.0 + i as f64 * 56.0, 34.0, INK);
    }

    for i in 0..4 {
        let y = 640.0 + i as f64 * 70.0;
        s.stroke_line(Point::new(1080.0, y), Point::new(1440.0, y), BORDER, 2.0);
    }
    chrome::text(s, "To: You", 1090.0, 590.0, 30.0, INK);
}
