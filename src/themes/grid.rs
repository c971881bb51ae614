use crate::{
    assets::library::AssetLibrary,
    foundation::core::{Rgba8, xywh},
    layout::grid::distribute,
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{Theme, ThemeId, chrome},
};

pub(crate) const THEME: Theme = Theme {
    id: ThemeId::Grid,
    display_name: "Grid",
    canvas_width: 1000,
    canvas_height: 1000,
};

pub(crate) const PADDING: f64 = 20.0;
pub(crate) const GAP: f64 = 20.0;
const BACKGROUND: Rgba8 = Rgba8::hex(0x1f1f24);
const HAIRLINE: Rgba8 = Rgba8::WHITE.with_alpha(60);

pub(crate) fn render(s: &mut dyn DrawingSurface, photos: &PhotoSet, _assets: &AssetLibrary) {
    chrome::background(s, &THEME, BACKGROUND);
    let area = xywh(
        PADDING,
        PADDING,
        f64::from(THEME.canvas_width) - PADDING * 2.0,
        f64::from(THEME.canvas_height) - PADDING * 2.0,
    );
    let slots = distribute(s, photos.as_slice(), photos.len(), area, GAP);
    for slot in slots {
        s.stroke_rect(slot.inflate(GAP / 4.0, GAP / 4.0), HAIRLINE, 1.0);
    }
}
