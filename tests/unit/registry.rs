use super::*;
use crate::{
    assets::raster::RasterImage,
    foundation::core::Rgba8,
    render::recording::RecordingSurface,
};

#[test]
fn catalogue_has_every_theme_and_count() {
    let reg = TemplateRegistry::new();
    assert_eq!(reg.len(), 48);
    assert!(!reg.is_empty());
    for theme in ThemeId::ALL {
        for count in 1..=4 {
            let t = reg.get(theme, count).unwrap();
            assert_eq!(t.theme(), theme);
            assert_eq!(t.photo_count(), count);
            assert_eq!(t.id(), format!("{}{}", theme.as_str(), count));
            assert_eq!((t.width(), t.height()), {
                let d = theme.theme();
                (d.canvas_width, d.canvas_height)
            });
            assert_eq!(t.canvas(), theme.theme().canvas());
        }
    }
}

#[test]
fn ids_are_unique() {
    let reg = TemplateRegistry::new();
    let ids: std::collections::HashSet<&str> = reg.iter().map(Template::id).collect();
    assert_eq!(ids.len(), 48);
}

#[test]
fn resolve_misses_return_none() {
    let reg = TemplateRegistry::new();
    assert!(reg.resolve("classic", 0).is_none());
    assert!(reg.resolve("classic", 5).is_none());
    assert!(reg.resolve("nope", 1).is_none());
    assert_eq!(reg.resolve("ticket", 2).unwrap().id(), "ticket2");
    assert_eq!(reg.by_id("grid4").unwrap().photo_count(), 4);
    assert!(reg.by_id("grid5").is_none());
}

#[test]
fn templates_for_count_follow_theme_order() {
    let reg = TemplateRegistry::new();
    let themes: Vec<ThemeId> = reg.templates_for_count(3).map(Template::theme).collect();
    assert_eq!(themes, ThemeId::ALL.to_vec());
    assert_eq!(reg.templates_for_count(7).count(), 0);
}

#[test]
fn render_delegates_to_the_theme() {
    let reg = TemplateRegistry::new();
    let t = reg.resolve("classic", 1).unwrap();
    let photos = PhotoSet::new(vec![RasterImage::solid(40, 30, Rgba8::BLACK).unwrap()]).unwrap();
    let mut s = RecordingSurface::new(t.width(), t.height());
    reg.render(t, &mut s, &photos, &AssetLibrary::empty());
    assert_eq!(s.image_draws().len(), 1);
}

#[test]
fn info_serializes_kebab_theme() {
    let reg = TemplateRegistry::new();
    let json = serde_json::to_value(reg.resolve("filmstrip", 2).unwrap().info()).unwrap();
    assert_eq!(json["id"], "filmstrip2");
    assert_eq!(json["theme"], "filmstrip");
    assert_eq!(json["width"], 700);
}
