use std::path::Path;

use crate::assets::font::{PreparedFont, TextShaper};
use crate::config::store::ConfigStore;
use crate::foundation::core::CanvasSize;
use crate::foundation::error::SubpressResult;
use crate::layout::resolve::{color_from_config, resolve_origin};
use crate::render::painters::{
    ImagePainter, TextBlurPainter, TextFillPainter, TextOutlinePainter, TextStamp, paint,
};
use crate::render::surface::Surface;

/// Drives one caption through the painter sequence and returns the finished
/// canvas.
///
/// The font is loaded once at construction; everything else (layout origin,
/// colors, radii) is resolved per caption, since caption strings differ.
pub struct RenderPipeline<'a> {
    cfg: &'a ConfigStore,
    size: CanvasSize,
    font: PreparedFont,
    font_size: f32,
    shaper: TextShaper,
}

impl<'a> RenderPipeline<'a> {
    pub fn new(cfg: &'a ConfigStore) -> SubpressResult<Self> {
        let size = CanvasSize::new(
            cfg.get_u32("screen_resolution_x")?,
            cfg.get_u32("screen_resolution_y")?,
        )?;
        let font = PreparedFont::load(Path::new(cfg.get_str("font_name")?))?;
        let font_size = cfg.get_int("font_size")? as f32;

        Ok(Self {
            cfg,
            size,
            font,
            font_size,
            shaper: TextShaper::new(),
        })
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.size
    }

    /// Render one caption, optionally over a background image.
    ///
    /// Layer order is load-bearing: background, then blur shadow, then
    /// outline, then fill. Any painter failure aborts the render; no partial
    /// output is valid.
    #[tracing::instrument(skip(self, background))]
    pub fn render(&mut self, caption: &str, background: Option<&Path>) -> SubpressResult<Surface> {
        let mut canvas = Surface::transparent(self.size)?;

        if let Some(path) = background {
            paint(&ImagePainter { path }, &mut canvas)?;
        }

        let shaped = self.shaper.shape(caption, &self.font, self.font_size)?;
        let origin = resolve_origin(self.cfg, shaped.width, shaped.height)?;
        tracing::debug!(?origin, width = shaped.width, height = shaped.height, "resolved caption layout");

        paint(
            &TextBlurPainter {
                stamp: TextStamp {
                    caption: &shaped,
                    font: &self.font,
                    origin,
                    color: color_from_config(self.cfg, "blur_color")?,
                },
                radius_px: self.cfg.get_int("blur_size")? as f64,
            },
            &mut canvas,
        )?;

        paint(
            &TextOutlinePainter {
                stamp: TextStamp {
                    caption: &shaped,
                    font: &self.font,
                    origin,
                    color: color_from_config(self.cfg, "outline_color")?,
                },
                radius_px: self.cfg.get_int("outline_size")? as f64,
            },
            &mut canvas,
        )?;

        paint(
            &TextFillPainter {
                stamp: TextStamp {
                    caption: &shaped,
                    font: &self.font,
                    origin,
                    color: color_from_config(self.cfg, "font_color")?,
                },
            },
            &mut canvas,
        )?;

        Ok(canvas)
    }
}
