use crate::{
    assets::library::{AssetLibrary, AssetName},
    foundation::core::{Rect, Rgba8, xywh},
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{Theme, ThemeId, chrome},
};

pub(crate) const THEME: Theme = Theme {
    id: ThemeId::Chat,
    display_name: "Chat",
    canvas_width: 1080,
    canvas_height: 1920,
};

const WALLPAPER: Rgba8 = Rgba8::hex(0xe5ddd5);
const HEADER: Rgba8 = Rgba8::hex(0x075e54);
const INCOMING: Rgba8 = Rgba8::WHITE;
const OUTGOING: Rgba8 = Rgba8::hex(0xdcf8c6);
const TIMESTAMP: Rgba8 = Rgba8::hex(0x8a8a8a);
const INPUT_BAR: Rgba8 = Rgba8::hex(0xf0f0f0);

const HEADER_H: f64 = 180.0;
const MESSAGES_TOP: f64 = 200.0;
const MESSAGES_BOTTOM: f64 = 1780.0;
const MESSAGE_GAP: f64 = 40.0;
const BUBBLE_W: f64 = 620.0;
const BUBBLE_MAX_H: f64 = 700.0;
const LEFT_X: f64 = 30.0;
const RIGHT_X: f64 = 430.0;
const BUBBLE_RADIUS: f64 = 24.0;
const PHOTO_RADIUS: f64 = 18.0;
const BUBBLE_PAD: f64 = 12.0;
const FOOTER_H: f64 = 40.0;

/// One message bubble and the photo inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Bubble {
    pub(crate) frame: Rect,
    pub(crate) photo: Rect,
    pub(crate) outgoing: bool,
}

/// Bubbles alternate incoming (left) and outgoing (right), splitting the message area evenly.
pub(crate) fn bubbles(count: usize) -> Vec<Bubble> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    let slot_h = (MESSAGES_BOTTOM - MESSAGES_TOP - (n - 1.0) * MESSAGE_GAP) / n;
    let bubble_h = slot_h.min(BUBBLE_MAX_H);
    (0..count)
        .map(|i| {
            let outgoing = i % 2 == 1;
            let x = if outgoing { RIGHT_X } else { LEFT_X };
            let y = MESSAGES_TOP + i as f64 * (slot_h + MESSAGE_GAP);
            let frame = xywh(x, y, BUBBLE_W, bubble_h);
            let photo = xywh(
                x + BUBBLE_PAD,
                y + BUBBLE_PAD,
                BUBBLE_W - BUBBLE_PAD * 2.0,
                bubble_h - BUBBLE_PAD - FOOTER_H,
            );
            Bubble {
                frame,
                photo,
                outgoing,
            }
        })
        .collect()
}

pub(crate) fn render(s: &mut dyn DrawingSurface, photos: &PhotoSet, assets: &AssetLibrary) {
    let width = f64::from(THEME.canvas_width);
    let height = f64::from(THEME.canvas_height);
    chrome::background(s, &THEME, WALLPAPER);

    s.fill_rect(xywh(0.0, 0.0, width, HEADER_H), HEADER);
    chrome::text(s, "9:41", 40.0, 20.0, 28.0, Rgba8::WHITE);
    chrome::icon(s, assets, AssetName::Signal, xywh(900.0, 22.0, 36.0, 28.0));
    chrome::icon(s, assets, AssetName::Battery, xywh(956.0, 22.0, 64.0, 28.0));
    s.fill_ellipse(xywh(40.0, 80.0, 80.0, 80.0), Rgba8::rgba(255, 255, 255, 60));
    chrome::icon(s, assets, AssetName::Avatar, xywh(40.0, 80.0, 80.0, 80.0));
    chrome::text(s, "Bestie", 145.0, 84.0, 38.0, Rgba8::WHITE);
    chrome::text(s, "online", 145.0, 130.0, 24.0, Rgba8::rgba(255, 255, 255, 190));

    for (i, bubble) in bubbles(photos.len()).into_iter().enumerate() {
        let fill = if bubble.outgoing { OUTGOING } else { INCOMING };
        s.fill_rounded_rect(bubble.frame, BUBBLE_RADIUS, fill);
        chrome::rounded_photo(s, photos, i, bubble.photo, PHOTO_RADIUS);

        let stamp_y = bubble.frame.y1 - FOOTER_H + 8.0;
        let stamp = format!("9:{:02}", 30 + i);
        chrome::text(s, &stamp, bubble.frame.x1 - 130.0, stamp_y, 22.0, TIMESTAMP);
        if bubble.outgoing {
            chrome::icon(
                s,
                assets,
                AssetName::DoubleCheck,
                xywh(bubble.frame.x1 - 60.0, stamp_y, 36.0, 24.0),
            );
        }
    }

    let bar_top = MESSAGES_BOTTOM + 20.0;
    s.fill_rect(xywh(0.0, bar_top, width, height - bar_top), INPUT_BAR);
    s.fill_rounded_rect(xywh(30.0, bar_top + 25.0, 860.0, 70.0), 35.0, Rgba8::WHITE);
    chrome::icon(s, assets, AssetName::Camera, xywh(800.0, bar_top + 38.0, 48.0, 44.0));
    chrome::text(s, "Message", 70.0, bar_top + 44.0, 28.0, TIMESTAMP);
    s.fill_ellipse(xywh(920.0, bar_top + 20.0, 80.0, 80.0), HEADER);
}
