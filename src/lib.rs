//! Photoframe composes one to four photos into a themed, fixed-size frame image.
//!
//! The engine is a pure function of its inputs:
//!
//! - Decode photos into a [`PhotoSet`]
//! - Pick a [`Template`] from the [`TemplateRegistry`] (theme x photo count)
//! - Let a [`Composer`] render it on the CPU and encode JPEG or PNG bytes
//!
//! Decorative icons and the text font come from an [`AssetLibrary`]; anything missing there is
//! skipped rather than reported.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compose;
mod encode;
mod foundation;
mod layout;
mod photo;
mod registry;
mod render;
mod themes;

pub use crate::assets::decode::{decode_image, parse_svg};
pub use crate::assets::library::{AssetLibrary, AssetName, FontAsset, ICON_RASTER_PX};
pub use crate::assets::raster::RasterImage;
pub use crate::assets::svg_raster::rasterize_svg;
pub use crate::compose::{ComposeOpts, Composer, DEFAULT_PREVIEW_MAX_DIMENSION, Preview};
pub use crate::encode::raster::{DEFAULT_JPEG_QUALITY, ExportFormat, encode_frame};
pub use crate::foundation::core::{Affine, Canvas, Point, Rect, Rgba8, Size, is_degenerate, xywh};
pub use crate::foundation::error::{FrameError, FrameResult};
pub use crate::layout::cover::{contain_rect, cover_source_rect, place_contain, place_cover};
pub use crate::layout::grid::{MAX_PHOTOS, TRIPLE_TOP_SHARE, distribute, grid_slots};
pub use crate::photo::{MAX_PHOTO_SIDE, PhotoSet};
pub use crate::registry::{Template, TemplateInfo, TemplateRegistry};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::frame::ComposedFrame;
pub use crate::render::recording::{DrawCommand, Recorded, RecordingSurface};
pub use crate::render::surface::{DrawingSurface, TextAlign, TextStyle};
pub use crate::themes::{RenderFn, Theme, ThemeId, themes};
