use super::*;

fn size(w: u32, h: u32) -> CanvasSize {
    CanvasSize::new(w, h).unwrap()
}

#[test]
fn new_surface_is_fully_transparent() {
    let s = Surface::transparent(size(2, 2)).unwrap();
    assert!(s.data().iter().all(|&b| b == 0));
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn composite_over_rejects_size_mismatch() {
    let mut a = Surface::transparent(size(2, 2)).unwrap();
    let b = Surface::transparent(size(2, 3)).unwrap();
    assert!(a.composite_over(&b).is_err());
}

#[test]
fn composite_over_stacks_layers_in_call_order() {
    let mut canvas = Surface::transparent(size(1, 1)).unwrap();
    let mut red = Surface::transparent(size(1, 1)).unwrap();
    red.data_mut().copy_from_slice(&[255, 0, 0, 255]);
    let mut blue = Surface::transparent(size(1, 1)).unwrap();
    blue.data_mut().copy_from_slice(&[0, 0, 255, 255]);

    canvas.composite_over(&red).unwrap();
    canvas.composite_over(&blue).unwrap();
    assert_eq!(canvas.pixel(0, 0), [0, 0, 255, 255]);
}

#[test]
fn to_straight_rgba8_unpremultiplies() {
    let mut s = Surface::transparent(size(1, 1)).unwrap();
    // 50% gray at 50% alpha, premultiplied.
    s.data_mut().copy_from_slice(&[64, 64, 64, 128]);
    let straight = s.to_straight_rgba8();
    assert_eq!(straight[3], 128);
    for c in &straight[..3] {
        assert!((i32::from(*c) - 128).abs() <= 1, "channel {c}");
    }
}

#[test]
fn from_premul_bytes_validates_length() {
    assert!(Surface::from_premul_bytes(size(2, 2), vec![0u8; 15]).is_err());
    assert!(Surface::from_premul_bytes(size(2, 2), vec![0u8; 16]).is_ok());
}
