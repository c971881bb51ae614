use super::*;
use crate::{assets::raster::RasterImage, foundation::core::Rgba8, themes::ThemeId};

const RED: Rgba8 = Rgba8::rgb(255, 0, 0);

fn composer() -> Composer {
    Composer::new(
        Arc::new(TemplateRegistry::new()),
        Arc::new(AssetLibrary::empty()),
        ComposeOpts::default(),
    )
    .unwrap()
}

fn solid_photos(colors: &[Rgba8]) -> PhotoSet {
    PhotoSet::new(
        colors
            .iter()
            .map(|c| RasterImage::solid(400, 300, *c).unwrap())
            .collect(),
    )
    .unwrap()
}

fn close(a: [u8; 4], b: [u8; 4], tol: u8) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= tol)
}

#[test]
fn opts_defaults_and_validation() {
    let opts = ComposeOpts::default();
    assert_eq!(opts.jpeg_quality, 95);
    assert_eq!(opts.preview_max_dimension, 250);
    assert_eq!(opts.export_format(), ExportFormat::Jpeg { quality: 95 });
    assert!(opts.validate().is_ok());
    assert!(ComposeOpts::from_env().validate().is_ok());

    let bad = ComposeOpts {
        jpeg_quality: 0,
        ..opts
    };
    assert!(matches!(bad.validate(), Err(FrameError::Validation(_))));
    let bad = ComposeOpts {
        preview_max_dimension: 0,
        ..opts
    };
    assert!(bad.validate().is_err());
    assert!(
        Composer::new(
            Arc::new(TemplateRegistry::new()),
            Arc::new(AssetLibrary::empty()),
            bad
        )
        .is_err()
    );
}

#[test]
fn single_red_photo_fills_the_classic_photo_area() {
    let c = composer();
    let template = c.registry().get(ThemeId::Classic, 1).unwrap();
    let frame = c.render_frame(&solid_photos(&[RED]), template).unwrap();
    assert_eq!((frame.width, frame.height), (800, 1000));

    for y in (22..978).step_by(37) {
        for x in (22..778).step_by(29) {
            let px = frame.pixel(x, y).unwrap();
            assert!(close(px, [255, 0, 0, 255], 2), "({x},{y}) = {px:?}");
        }
    }
    assert!(close(frame.pixel(5, 5).unwrap(), [255, 255, 255, 255], 1));
    assert!(close(frame.pixel(795, 995).unwrap(), [255, 255, 255, 255], 1));
}

#[test]
fn count_mismatch_is_rejected() {
    let c = composer();
    let template = c.registry().resolve("polaroid", 3).unwrap();
    let photos = solid_photos(&[RED, RED]);
    let err = c.compose(&photos, template).unwrap_err();
    assert!(matches!(
        err,
        FrameError::InvalidPhotoCount {
            expected: 3,
            actual: 2
        }
    ));
    assert!(c.compose_preview(&photos, template, 100).is_err());
}

#[test]
fn unknown_theme_id_is_template_not_found() {
    let err = composer()
        .compose_by_id("vaporwave", &solid_photos(&[RED]))
        .unwrap_err();
    assert!(matches!(
        err,
        FrameError::TemplateNotFound { ref theme, photo_count: 1 } if theme == "vaporwave"
    ));
}

#[test]
fn compose_is_deterministic_and_decodable() {
    let c = composer();
    let photos = solid_photos(&[RED, Rgba8::hex(0x00ff00)]);
    let template = c.registry().resolve("grid", 2).unwrap();
    let a = c.compose(&photos, template).unwrap();
    let b = c.compose(&photos, template).unwrap();
    assert_eq!(a, b);
    let img = image::load_from_memory(&a).unwrap();
    assert_eq!((img.width(), img.height()), (1000, 1000));
}

#[test]
fn preview_keeps_aspect_and_layout() {
    let c = composer();
    let colors = [RED, Rgba8::hex(0x00ff00), Rgba8::hex(0x0000ff), Rgba8::hex(0xffff00)];
    let photos = solid_photos(&colors);
    let template = c.registry().resolve("grid", 4).unwrap();
    let full = c.render_frame(&photos, template).unwrap();
    let preview = c.render_preview_frame(&photos, template, 250).unwrap();
    assert_eq!((preview.width, preview.height), (250, 250));

    let scale = f64::from(full.width) / f64::from(preview.width);
    for (px, py) in [(62u32, 62u32), (187, 62), (62, 187), (187, 187)] {
        let fx = (f64::from(px) * scale) as u32;
        let fy = (f64::from(py) * scale) as u32;
        let a = preview.pixel(px, py).unwrap();
        let b = full.pixel(fx, fy).unwrap();
        assert!(close(a, b, 4), "preview ({px},{py}) {a:?} vs full {b:?}");
    }

    let classic = c.registry().resolve("classic", 4).unwrap();
    let small = c.render_preview_frame(&photos, classic, 250).unwrap();
    assert_eq!((small.width, small.height), (200, 250));
    assert!(c.render_preview_frame(&photos, classic, 0).is_err());
}

#[test]
fn gallery_lists_every_theme_for_the_count() {
    let c = composer();
    let photos = solid_photos(&[RED, RED]);
    let gallery = c.preview_gallery(&photos).unwrap();
    assert_eq!(gallery.len(), 12);
    assert_eq!(gallery[0].template_id, "classic2");
    for p in &gallery {
        assert!(p.template_id.ends_with('2'));
        let img = image::load_from_memory(&p.bytes).unwrap();
        assert_eq!(img.width().max(img.height()), 250);
    }
}
