//! The closed set of visual themes and their render routines.

use std::{fmt, str::FromStr};

use crate::{
    assets::library::AssetLibrary,
    foundation::{
        core::Canvas,
        error::{FrameError, FrameResult},
    },
    photo::PhotoSet,
    render::surface::DrawingSurface,
};

pub(crate) mod chrome;

mod chat;
mod classic;
mod comic;
mod filmstrip;
mod grid;
mod magazine;
mod notebook;
mod player;
mod polaroid;
mod postcard;
mod tabloid;
mod ticket;

/// Render routine shared by every template of a theme.
///
/// Draws into `surface` in template pixel coordinates. Photos beyond the set's length and
/// absent assets are skipped; the routine never fails.
pub type RenderFn = fn(&mut dyn DrawingSurface, &PhotoSet, &AssetLibrary);

/// Identifier of one of the built-in themes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeId {
    /// White card with evenly padded photos.
    Classic,
    /// Tight square grid on a dark backdrop.
    Grid,
    /// Instant-photo card with a caption strip.
    Polaroid,
    /// Vertical film strip with sprocket holes.
    Filmstrip,
    /// Music-player screen with the photos as album art.
    Player,
    /// Messenger conversation with photo bubbles.
    Chat,
    /// Newspaper front page with filler columns.
    Tabloid,
    /// Full-bleed magazine cover.
    Magazine,
    /// Landscape postcard with stamp and address lines.
    Postcard,
    /// Event ticket with a tear-off stub.
    Ticket,
    /// Ruled notebook page with taped photos.
    Notebook,
    /// Comic-book page with inked panels.
    Comic,
}

impl ThemeId {
    /// Every theme, in registry order.
    pub const ALL: [ThemeId; 12] = [
        ThemeId::Classic,
        ThemeId::Grid,
        ThemeId::Polaroid,
        ThemeId::Filmstrip,
        ThemeId::Player,
        ThemeId::Chat,
        ThemeId::Tabloid,
        ThemeId::Magazine,
        ThemeId::Postcard,
        ThemeId::Ticket,
        ThemeId::Notebook,
        ThemeId::Comic,
    ];

    /// Stable string identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Classic => "classic",
            ThemeId::Grid => "grid",
            ThemeId::Polaroid => "polaroid",
            ThemeId::Filmstrip => "filmstrip",
            ThemeId::Player => "player",
            ThemeId::Chat => "chat",
            ThemeId::Tabloid => "tabloid",
            ThemeId::Magazine => "magazine",
            ThemeId::Postcard => "postcard",
            ThemeId::Ticket => "ticket",
            ThemeId::Notebook => "notebook",
            ThemeId::Comic => "comic",
        }
    }

    /// Static descriptor of this theme.
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeId::Classic => &classic::THEME,
            ThemeId::Grid => &grid::THEME,
            ThemeId::Polaroid => &polaroid::THEME,
            ThemeId::Filmstrip => &filmstrip::THEME,
            ThemeId::Player => &player::THEME,
            ThemeId::Chat => &chat::THEME,
            ThemeId::Tabloid => &tabloid::THEME,
            ThemeId::Magazine => &magazine::THEME,
            ThemeId::Postcard => &postcard::THEME,
            ThemeId::Ticket => &ticket::THEME,
            ThemeId::Notebook => &notebook::THEME,
            ThemeId::Comic => &comic::THEME,
        }
    }

    pub(crate) fn render_fn(self) -> RenderFn {
        match self {
            ThemeId::Classic => classic::render,
            ThemeId::Grid => grid::render,
            ThemeId::Polaroid => polaroid::render,
            ThemeId::Filmstrip => filmstrip::render,
            ThemeId::Player => player::render,
            ThemeId::Chat => chat::render,
            ThemeId::Tabloid => tabloid::render,
            ThemeId::Magazine => magazine::render,
            ThemeId::Postcard => postcard::render,
            ThemeId::Ticket => ticket::render,
            ThemeId::Notebook => notebook::render,
            ThemeId::Comic => comic::render,
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = FrameError;

    fn from_str(s: &str) -> FrameResult<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FrameError::validation(format!("unknown theme '{s}'")))
    }
}

/// Immutable theme descriptor: identity and the fixed canvas size of every template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Theme {
    /// Identifier.
    pub id: ThemeId,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Canvas width in pixels, independent of photo count.
    pub canvas_width: u32,
    /// Canvas height in pixels, independent of photo count.
    pub canvas_height: u32,
}

impl Theme {
    /// Canvas shared by every template of this theme.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.canvas_width,
            height: self.canvas_height,
        }
    }
}

/// Descriptors of every theme, in registry order.
pub fn themes() -> impl Iterator<Item = &'static Theme> {
    ThemeId::ALL.into_iter().map(ThemeId::theme)
}

#[cfg(test)]
#[path = "../../tests/unit/themes/mod.rs"]
mod tests;
