//! The fixed catalogue of templates: every theme paired with every supported photo count.

use tracing::debug;

use crate::{
    assets::library::AssetLibrary,
    foundation::core::Canvas,
    layout::grid::MAX_PHOTOS,
    photo::PhotoSet,
    render::surface::DrawingSurface,
    themes::{RenderFn, ThemeId},
};

/// Immutable description of one frame layout.
///
/// The canvas size depends on the theme only; the photo count decides how many slots are
/// filled.
#[derive(Clone, Debug)]
pub struct Template {
    id: String,
    theme: ThemeId,
    photo_count: usize,
    width: u32,
    height: u32,
    render: RenderFn,
}

impl Template {
    fn new(theme: ThemeId, photo_count: usize) -> Self {
        let descriptor = theme.theme();
        Self {
            id: format!("{theme}{photo_count}"),
            theme,
            photo_count,
            width: descriptor.canvas_width,
            height: descriptor.canvas_height,
            render: theme.render_fn(),
        }
    }

    /// Identifier: theme id followed by the photo count, e.g. `polaroid3`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Theme this template belongs to.
    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    /// Number of photos the template expects.
    pub fn photo_count(&self) -> usize {
        self.photo_count
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Canvas size as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Serializable summary for listings.
    pub fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: self.id.clone(),
            theme: self.theme,
            display_name: self.theme.theme().display_name,
            photo_count: self.photo_count,
            width: self.width,
            height: self.height,
        }
    }

    /// Draw this template into `surface` using template pixel coordinates.
    pub fn render(
        &self,
        surface: &mut dyn DrawingSurface,
        photos: &PhotoSet,
        assets: &AssetLibrary,
    ) {
        (self.render)(surface, photos, assets);
    }
}

/// Plain-data view of a [`Template`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TemplateInfo {
    /// Template identifier.
    pub id: String,
    /// Theme identifier.
    pub theme: ThemeId,
    /// Human-readable theme name.
    pub display_name: &'static str,
    /// Expected photo count.
    pub photo_count: usize,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Every template, built once and read-only afterwards.
#[derive(Clone, Debug)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry {
    /// Build the full catalogue, ordered by theme and then by photo count.
    pub fn new() -> Self {
        let templates: Vec<Template> = ThemeId::ALL
            .into_iter()
            .flat_map(|theme| (1..=MAX_PHOTOS).map(move |count| Template::new(theme, count)))
            .collect();
        debug!(templates = templates.len(), "template registry built");
        Self { templates }
    }

    /// Look a template up by theme identifier string and photo count.
    pub fn resolve(&self, theme_id: &str, photo_count: usize) -> Option<&Template> {
        let theme = theme_id.parse::<ThemeId>().ok()?;
        self.get(theme, photo_count)
    }

    /// Look a template up by theme and photo count.
    pub fn get(&self, theme: ThemeId, photo_count: usize) -> Option<&Template> {
        self.templates
            .iter()
            .find(|t| t.theme == theme && t.photo_count == photo_count)
    }

    /// Look a template up by its full identifier, e.g. `grid4`.
    pub fn by_id(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Render `template` into `surface`.
    pub fn render(
        &self,
        template: &Template,
        surface: &mut dyn DrawingSurface,
        photos: &PhotoSet,
        assets: &AssetLibrary,
    ) {
        template.render(surface, photos, assets);
    }

    /// Templates expecting exactly `photo_count` photos, in registry order.
    pub fn templates_for_count(&self, photo_count: usize) -> impl Iterator<Item = &Template> {
        self.templates
            .iter()
            .filter(move |t| t.photo_count == photo_count)
    }

    /// Every template, in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// `true` when the registry holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/unit/registry.rs"]
mod tests;
