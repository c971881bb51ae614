use crate::{
    assets::library::{AssetLibrary, AssetName},
    foundation::core::{Rgba8, xywh},
    layout::grid::distribute,
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{Theme, ThemeId, chrome},
};

pub(crate) const THEME: Theme = Theme {
    id: ThemeId::Ticket,
    display_name: "Ticket",
    canvas_width: 1400,
    canvas_height: 700,
};

const BACKDROP: Rgba8 = Rgba8::hex(0x1c1c28);
const PAPER: Rgba8 = Rgba8::hex(0xf7c948);
const INK: Rgba8 = Rgba8::hex(0x2a1a05);

const BODY_INSET: f64 = 40.0;
const BODY_RADIUS: f64 = 28.0;
const PERFORATION_X: f64 = 1040.0;
const NOTCH: f64 = 60.0;
const DOT: f64 = 10.0;
const DOT_PITCH: f64 = 26.0;
const GAP: f64 = 10.0;

pub(crate) fn render(s: &mut dyn DrawingSurface, photos: &PhotoSet, assets: &AssetLibrary) {
    let width = f64::from(THEME.canvas_width);
    let height = f64::from(THEME.canvas_height);
    chrome::background(s, &THEME, BACKDROP);

    let body = xywh(
        BODY_INSET,
        BODY_INSET,
        width - BODY_INSET * 2.0,
        height - BODY_INSET * 2.0,
    );
    s.fill_rounded_rect(body, BODY_RADIUS, PAPER);

    // Notches and perforation between the main part and the stub.
    let half = NOTCH / 2.0;
    s.fill_ellipse(xywh(PERFORATION_X - half, body.y0 - half, NOTCH, NOTCH), BACKDROP);
    s.fill_ellipse(xywh(PERFORATION_X - half, body.y1 - half, NOTCH, NOTCH), BACKDROP);
    let mut y = body.y0 + half + DOT_PITCH;
    while y + DOT < body.y1 - half {
        s.fill_ellipse(xywh(PERFORATION_X - DOT / 2.0, y, DOT, DOT), BACKDROP);
        y += DOT_PITCH;
    }

    let area = xywh(80.0, 80.0, 620.0, 540.0);
    s.fill_rect(area, INK);
    distribute(s, photos.as_slice(), photos.len(), area, GAP);

    chrome::text(s, "ADMIT ONE", 740.0, 90.0, 30.0, INK);
    chrome::text(s, "PHOTO", 740.0, 170.0, 84.0, INK);
    chrome::text(s, "NIGHT", 740.0, 270.0, 84.0, INK);
    for i in 0..3 {
        chrome::icon(
            s,
            assets,
            AssetName::Star,
            xywh(745.0 + i as f64 * 60.0, 400.0, 44.0, 44.0),
        );
    }
    chrome::text(s, "ROW F  SEAT 12", 740.0, 480.0, 26.0, INK);
    chrome::text(s, "DOORS 21:00", 740.0, 530.0, 26.0, INK);

    let stub_x = PERFORATION_X + 40.0;
    let stub_w = body.x1 - stub_x - 40.0;
    chrome::centered_text(s, "ADMIT ONE", stub_x, 100.0, stub_w, 26.0, INK);
    chrome::centered_text(s, "No. 000427", stub_x, 160.0, stub_w, 34.0, INK);
    chrome::barcode(s, xywh(stub_x, 420.0, stub_w, 160.0), 427, INK);
}
