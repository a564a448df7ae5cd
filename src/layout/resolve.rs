use kurbo::Vec2;

use crate::config::store::ConfigStore;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{SubpressError, SubpressResult};

/// Horizontal anchor rule within the configured bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

impl HAlign {
    pub fn parse(value: &str) -> SubpressResult<Self> {
        match value {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(SubpressError::validation(format!(
                "horizontal align \"{other}\" is invalid"
            ))),
        }
    }
}

/// Vertical anchor rule within the configured bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    pub fn parse(value: &str) -> SubpressResult<Self> {
        match value {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            other => Err(SubpressError::validation(format!(
                "vertical align \"{other}\" is invalid"
            ))),
        }
    }
}

/// Compute the top-left drawing origin for a measured text block.
///
/// The bounding rectangle comes from `position_lefttop_x/y` and
/// `position_rightbottom_x/y`; the anchor rules from
/// `position_horizontal_align` and `position_vertical_align`.
pub fn resolve_origin(
    cfg: &ConfigStore,
    text_width: f64,
    text_height: f64,
) -> SubpressResult<Vec2> {
    let left = cfg.get_int("position_lefttop_x")? as f64;
    let top = cfg.get_int("position_lefttop_y")? as f64;
    let right = cfg.get_int("position_rightbottom_x")? as f64;
    let bottom = cfg.get_int("position_rightbottom_y")? as f64;

    let x = match HAlign::parse(cfg.get_str("position_horizontal_align")?)? {
        HAlign::Left => left,
        HAlign::Center => left + (right - left) / 2.0 - text_width / 2.0,
        HAlign::Right => right - text_width,
    };

    let y = match VAlign::parse(cfg.get_str("position_vertical_align")?)? {
        VAlign::Top => top,
        VAlign::Middle => top + (bottom - top) / 2.0 - text_height / 2.0,
        VAlign::Bottom => bottom - text_height,
    };

    Ok(Vec2::new(x, y))
}

/// Read `<prefix>_r`, `<prefix>_g`, `<prefix>_b` into one opaque color.
pub fn color_from_config(cfg: &ConfigStore, prefix: &str) -> SubpressResult<Rgba8> {
    let channel = |suffix: &str| -> SubpressResult<u8> {
        let key = format!("{prefix}_{suffix}");
        let v = cfg.get_int(&key)?;
        u8::try_from(v).map_err(|_| {
            SubpressError::validation(format!(
                "color channel '{key}' must be in 0..=255, got {v}"
            ))
        })
    };
    Ok(Rgba8::opaque(channel("r")?, channel("g")?, channel("b")?))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/resolve.rs"]
mod tests;
