use super::*;

#[test]
fn canvas_rejects_zero_and_oversized_sides() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(800, 1000).unwrap();
    assert_eq!(c.max_side(), 1000);
    assert_eq!(c.bounds(), Rect::new(0.0, 0.0, 800.0, 1000.0));
}

#[test]
fn xywh_clamps_negative_sizes() {
    let r = xywh(10.0, 20.0, -5.0, 30.0);
    assert_eq!(r.x0, 10.0);
    assert_eq!(r.width(), 0.0);
    assert!(is_degenerate(r));
    assert!(!is_degenerate(xywh(0.0, 0.0, 1.0, 1.0)));
}

#[test]
fn hex_and_premul() {
    let c = Rgba8::hex(0x667eea);
    assert_eq!(c, Rgba8::rgb(0x66, 0x7e, 0xea));
    assert_eq!(Rgba8::WHITE.to_premul(), [255, 255, 255, 255]);
    assert_eq!(Rgba8::rgba(255, 0, 0, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::rgba(255, 255, 255, 128).to_premul(), [128, 128, 128, 128]);
}

#[test]
fn with_alpha_keeps_channels() {
    const VEIL: Rgba8 = Rgba8::WHITE.with_alpha(60);
    assert_eq!(VEIL, Rgba8::rgba(255, 255, 255, 60));
    assert_eq!(Rgba8::hex(0x102030).with_alpha(0).to_premul(), [0, 0, 0, 0]);
}
