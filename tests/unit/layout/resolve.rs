use super::*;
use crate::config::store::ConfigStore;

fn cfg_with_aligns(horizontal: &str, vertical: &str) -> ConfigStore {
    let mut cfg = ConfigStore::new();
    cfg.parse_str(&format!(
        "position_horizontal_align = {horizontal}\n\
         position_vertical_align = {vertical}\n\
         position_lefttop_x = 0\n\
         position_lefttop_y = 10\n\
         position_rightbottom_x = 100\n\
         position_rightbottom_y = 60\n"
    ))
    .unwrap();
    cfg
}

#[test]
fn center_alignment_centers_within_box() {
    let cfg = cfg_with_aligns("center", "middle");
    let origin = resolve_origin(&cfg, 20.0, 10.0).unwrap();
    assert_eq!(origin.x, 40.0);
    assert_eq!(origin.y, 10.0 + 25.0 - 5.0);
}

#[test]
fn left_and_top_pin_to_the_box_edges() {
    let cfg = cfg_with_aligns("left", "top");
    let origin = resolve_origin(&cfg, 20.0, 10.0).unwrap();
    assert_eq!(origin.x, 0.0);
    assert_eq!(origin.y, 10.0);
}

#[test]
fn right_and_bottom_subtract_the_text_size() {
    let cfg = cfg_with_aligns("right", "bottom");
    let origin = resolve_origin(&cfg, 20.0, 10.0).unwrap();
    assert_eq!(origin.x, 80.0);
    assert_eq!(origin.y, 50.0);
}

#[test]
fn invalid_alignment_values_are_named() {
    let cfg = cfg_with_aligns("justified", "top");
    let err = resolve_origin(&cfg, 20.0, 10.0).unwrap_err();
    assert!(err.to_string().contains("justified"));

    let cfg = cfg_with_aligns("left", "baseline");
    let err = resolve_origin(&cfg, 20.0, 10.0).unwrap_err();
    assert!(err.to_string().contains("baseline"));
}

#[test]
fn color_from_config_combines_channels() {
    let mut cfg = ConfigStore::new();
    cfg.parse_str("font_color_r = 10\nfont_color_g = 20\nfont_color_b = 30\n")
        .unwrap();
    let c = color_from_config(&cfg, "font_color").unwrap();
    assert_eq!(c, Rgba8 { r: 10, g: 20, b: 30, a: 255 });
}

#[test]
fn color_channel_out_of_range_is_rejected() {
    let mut cfg = ConfigStore::new();
    cfg.parse_str("blur_color_r = 300\nblur_color_g = 0\nblur_color_b = 0\n")
        .unwrap();
    let err = color_from_config(&cfg, "blur_color").unwrap_err();
    assert!(err.to_string().contains("blur_color_r"));
}

#[test]
fn missing_channel_is_a_config_error() {
    let mut cfg = ConfigStore::new();
    cfg.parse_str("outline_color_r = 1\noutline_color_g = 2\n").unwrap();
    assert!(color_from_config(&cfg, "outline_color").is_err());
}
