use crate::{
    assets::library::AssetLibrary,
    foundation::core::{Point, Rect, Rgba8, xywh},
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{Theme, ThemeId, chrome},
};

pub(crate) const THEME: Theme = Theme {
    id: ThemeId::Tabloid,
    display_name: "Tabloid",
    canvas_width: 1200,
    canvas_height: 1600,
};

const NEWSPRINT: Rgba8 = Rgba8::hex(0xf4f0e6);
const INK: Rgba8 = Rgba8::hex(0x161616);
const RED: Rgba8 = Rgba8::hex(0xc8102e);

const MARGIN: f64 = 40.0;
const BODY_TOP: f64 = 360.0;
const BODY_BOTTOM: f64 = 1540.0;
const GUTTER: f64 = 30.0;
const COLUMNS: usize = 3;
const BLOCK_GAP: f64 = 20.0;
const LINE_H: f64 = 26.0;
const BODY_SIZE: f32 = 18.0;
const CHARS_PER_LINE: usize = 30;

/// What fills one block of a column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Block {
    /// Photo with this index, taking the given share of the column height.
    Photo(usize, f64),
    /// Filler copy taking the given share of the column height.
    Filler(f64),
}

/// Per-column block layout for `count` photos.
pub(crate) fn column_blocks(count: usize) -> [Vec<Block>; COLUMNS] {
    use Block::{Filler, Photo};
    match count {
        1 => [
            vec![Photo(0, 0.65), Filler(0.35)],
            vec![Filler(1.0)],
            vec![Filler(1.0)],
        ],
        2 => [
            vec![Photo(0, 0.55), Filler(0.45)],
            vec![Filler(0.4), Photo(1, 0.6)],
            vec![Filler(1.0)],
        ],
        3 => [
            vec![Photo(0, 0.5), Filler(0.5)],
            vec![Filler(0.3), Photo(1, 0.45), Filler(0.25)],
            vec![Photo(2, 0.6), Filler(0.4)],
        ],
        4 => [
            vec![Photo(0, 0.45), Filler(0.1), Photo(3, 0.45)],
            vec![Filler(0.35), Photo(1, 0.65)],
            vec![Photo(2, 0.55), Filler(0.45)],
        ],
        _ => [vec![Filler(1.0)], vec![Filler(1.0)], vec![Filler(1.0)]],
    }
}

fn column_rect(col: usize) -> Rect {
    let inner = f64::from(THEME.canvas_width) - MARGIN * 2.0;
    let w = (inner - GUTTER * (COLUMNS - 1) as f64) / COLUMNS as f64;
    xywh(
        MARGIN + col as f64 * (w + GUTTER),
        BODY_TOP,
        w,
        BODY_BOTTOM - BODY_TOP,
    )
}

fn copy_block(s: &mut dyn DrawingSurface, rect: Rect, seed: u64) {
    let lines = (rect.height() / LINE_H).floor() as usize;
    for (i, line) in chrome::filler_lines(seed, lines, CHARS_PER_LINE).iter().enumerate() {
        chrome::text(s, line, rect.x0, rect.y0 + i as f64 * LINE_H, BODY_SIZE, INK);
    }
}

pub(crate) fn render(s: &mut dyn DrawingSurface, photos: &PhotoSet, _assets: &AssetLibrary) {
    let width = f64::from(THEME.canvas_width);
    chrome::background(s, &THEME, NEWSPRINT);

    s.fill_rect(xywh(MARGIN, MARGIN, width - MARGIN * 2.0, 120.0), RED);
    chrome::centered_text(s, "THE DAILY SNAP", 0.0, 62.0, width, 72.0, Rgba8::WHITE);
    s.stroke_line(
        Point::new(MARGIN, 180.0),
        Point::new(width - MARGIN, 180.0),
        INK,
        3.0,
    );
    chrome::text(s, "VOL. XII  No. 4", MARGIN, 190.0, 18.0, INK);
    chrome::text(s, "LATE EDITION", width - MARGIN - 150.0, 190.0, 18.0, INK);
    s.stroke_line(
        Point::new(MARGIN, 218.0),
        Point::new(width - MARGIN, 218.0),
        INK,
        1.0,
    );

    let headline = match photos.len() {
        1 => "STAR SPOTTED IN BOOTH",
        2 => "SECRET DUO CAUGHT ON CAMERA",
        3 => "THREE'S A CROWD: SHOCK PHOTOS",
        _ => "FAB FOUR REUNITE FOR ONE NIGHT",
    };
    let inner_w = width - MARGIN * 2.0;
    chrome::centered_text(s, headline, MARGIN, 240.0, inner_w, 52.0, INK);
    chrome::centered_text(s, "Exclusive pictures inside", MARGIN, 310.0, inner_w, 22.0, RED);

    for (col, blocks) in column_blocks(photos.len()).iter().enumerate() {
        let column = column_rect(col);
        let avail = column.height() - BLOCK_GAP * (blocks.len() - 1) as f64;
        let mut y = column.y0;
        for (b, block) in blocks.iter().enumerate() {
            let share = match *block {
                Block::Photo(_, share) | Block::Filler(share) => share,
            };
            let rect = xywh(column.x0, y, column.width(), avail * share);
            match *block {
                Block::Photo(index, _) => {
                    chrome::photo(s, photos, index, rect);
                    s.stroke_rect(rect, INK, 2.0);
                }
                Block::Filler(_) => copy_block(s, rect, (col * 8 + b) as u64),
            }
            y = rect.y1 + BLOCK_GAP;
        }
    }

    s.stroke_line(
        Point::new(MARGIN, BODY_BOTTOM + 15.0),
        Point::new(width - MARGIN, BODY_BOTTOM + 15.0),
        INK,
        1.0,
    );
    chrome::centered_text(s, "PAGE 1", 0.0, BODY_BOTTOM + 24.0, width, 18.0, INK);
}
