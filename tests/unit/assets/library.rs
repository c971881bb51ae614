use std::io::Cursor;

use super::*;
use crate::foundation::core::Rgba8;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "photoframe_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn manifest_has_seventeen_unique_names() {
    let mut names: Vec<&str> = AssetName::ALL.iter().map(|a| a.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 17);
    for a in AssetName::ALL {
        assert_eq!(AssetName::from_name(a.as_str()), Some(a));
    }
    assert_eq!(AssetName::from_name("unicorn"), None);
}

#[test]
fn load_dir_reads_png_and_svg_and_skips_broken_entries() {
    let tmp = temp_dir("library_load");
    let icons = tmp.join("icons");
    std::fs::create_dir_all(&icons).unwrap();

    std::fs::write(icons.join("heart.png"), png_bytes(8, 8)).unwrap();
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
        <rect width="10" height="10" fill="#fff"/></svg>"##;
    std::fs::write(icons.join("star.svg"), svg).unwrap();
    std::fs::write(icons.join("sun.png"), b"not a png").unwrap();

    let lib = AssetLibrary::load_dir(&tmp);
    assert_eq!(lib.get(AssetName::Heart).map(|i| i.width()), Some(8));
    assert_eq!(
        lib.get(AssetName::Star).map(|i| (i.width(), i.height())),
        Some((ICON_RASTER_PX, ICON_RASTER_PX))
    );
    assert!(lib.get(AssetName::Sun).is_none());
    assert!(lib.get(AssetName::Cloud).is_none());
    assert!(lib.font().is_none());
    assert_eq!(lib.icon_count(), 2);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn load_dir_on_missing_root_is_empty() {
    let lib = AssetLibrary::load_dir(temp_dir("library_missing"));
    assert_eq!(lib.icon_count(), 0);
    assert!(lib.font().is_none());
}

#[test]
fn builder_helpers_add_and_remove() {
    let icon = RasterImage::solid(2, 2, Rgba8::WHITE).unwrap();
    let lib = AssetLibrary::empty()
        .with_icon(AssetName::Play, icon.clone())
        .with_icon(AssetName::Heart, icon);
    assert!(lib.get_by_name("play").is_some());
    let lib = lib.without_icon(AssetName::Play);
    assert!(lib.get(AssetName::Play).is_none());
    assert!(lib.get(AssetName::Heart).is_some());
}

#[test]
fn empty_font_bytes_are_rejected() {
    assert!(FontAsset::from_bytes(Vec::new()).is_err());
}

#[test]
fn load_dir_picks_up_the_first_font_file() {
    let tmp = temp_dir("library_font");
    let fonts = tmp.join("fonts");
    std::fs::create_dir_all(&fonts).unwrap();
    let fixture = std::fs::read(
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data")
            .join("fonts")
            .join("DejaVuSans.ttf"),
    )
    .unwrap();
    std::fs::write(fonts.join("README.txt"), b"not a font").unwrap();
    std::fs::write(fonts.join("DejaVuSans.ttf"), &fixture).unwrap();

    let lib = AssetLibrary::load_dir(&tmp);
    let font = lib.font().expect("font should load");
    assert_eq!(font.bytes().len(), fixture.len());
    assert_eq!(lib.icon_count(), 0);

    std::fs::remove_dir_all(&tmp).ok();
}
