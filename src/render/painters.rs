use std::path::Path;

use anyhow::Context;
use kurbo::Vec2;

use crate::assets::font::{PreparedFont, ShapedCaption};
use crate::assets::image::decode_image;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{SubpressError, SubpressResult};
use crate::render::blur::gaussian_blur_premul;
use crate::render::surface::Surface;

/// Number of angular stamps used to approximate outline and blur rings.
const RING_STAMPS: usize = 64;

/// A drawing strategy producing exactly one transparent layer.
///
/// Painters never touch the shared canvas; [`paint`] hands each one a fresh
/// transparent layer and composites the result. Painter values are
/// single-use: constructed for one caption, drawn once.
pub trait LayerPainter {
    fn draw(&self, layer: &mut Surface) -> SubpressResult<()>;
}

/// Allocate a fresh transparent layer sized like `canvas`, let `painter` draw
/// into it, then source-over composite it onto `canvas`.
pub fn paint(painter: &dyn LayerPainter, canvas: &mut Surface) -> SubpressResult<()> {
    let mut layer = Surface::transparent(canvas.size())?;
    painter.draw(&mut layer)?;
    canvas.composite_over(&layer)
}

/// Pastes a decoded image at the layer origin, ignoring alignment config.
/// Used for the trial-mode background photo.
pub struct ImagePainter<'a> {
    pub path: &'a Path,
}

impl LayerPainter for ImagePainter<'_> {
    fn draw(&self, layer: &mut Surface) -> SubpressResult<()> {
        let bytes = std::fs::read(self.path)
            .with_context(|| format!("read background image '{}'", self.path.display()))?;
        let img = decode_image(&bytes)?;

        let copy_w = (img.width.min(layer.width()) as usize) * 4;
        let copy_h = img.height.min(layer.height()) as usize;
        let src_stride = (img.width as usize) * 4;
        let dst_stride = (layer.width() as usize) * 4;

        let dst = layer.data_mut();
        for y in 0..copy_h {
            let src_off = y * src_stride;
            let dst_off = y * dst_stride;
            dst[dst_off..dst_off + copy_w].copy_from_slice(&img.rgba8_premul[src_off..src_off + copy_w]);
        }
        Ok(())
    }
}

/// Shared glyph-stamping state for the text painter variants: one shaped
/// caption, the font it was shaped with, the resolved origin, and the color
/// this variant paints in.
pub struct TextStamp<'a> {
    pub caption: &'a ShapedCaption,
    pub font: &'a PreparedFont,
    pub origin: Vec2,
    pub color: Rgba8,
}

impl TextStamp<'_> {
    fn stamp_at(&self, ctx: &mut vello_cpu::RenderContext, offset: Vec2) {
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            self.origin.x + offset.x,
            self.origin.y + offset.y,
        )));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            self.color.r,
            self.color.g,
            self.color.b,
            self.color.a,
        ));

        for line in self.caption.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(self.font.data())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

/// Draws the caption once at the resolved origin (the topmost fill layer).
pub struct TextFillPainter<'a> {
    pub stamp: TextStamp<'a>,
}

impl LayerPainter for TextFillPainter<'_> {
    fn draw(&self, layer: &mut Surface) -> SubpressResult<()> {
        let bytes = rasterize(layer.size().width, layer.size().height, |ctx| {
            self.stamp.stamp_at(ctx, Vec2::ZERO);
        })?;
        layer.data_mut().copy_from_slice(&bytes);
        Ok(())
    }
}

/// Draws the caption 64 times around a circle of `radius_px`, approximating a
/// stroke. Sits between the blur shadow and the fill.
pub struct TextOutlinePainter<'a> {
    pub stamp: TextStamp<'a>,
    pub radius_px: f64,
}

impl LayerPainter for TextOutlinePainter<'_> {
    fn draw(&self, layer: &mut Surface) -> SubpressResult<()> {
        let bytes = rasterize(layer.size().width, layer.size().height, |ctx| {
            for offset in ring_offsets(self.radius_px) {
                self.stamp.stamp_at(ctx, offset);
            }
        })?;
        layer.data_mut().copy_from_slice(&bytes);
        Ok(())
    }
}

/// Draws the same ring of stamps, then gaussian-blurs the whole layer with
/// standard deviation `radius_px`, producing a soft drop shadow. Must be the
/// bottom-most text layer.
pub struct TextBlurPainter<'a> {
    pub stamp: TextStamp<'a>,
    pub radius_px: f64,
}

impl LayerPainter for TextBlurPainter<'_> {
    fn draw(&self, layer: &mut Surface) -> SubpressResult<()> {
        let bytes = rasterize(layer.size().width, layer.size().height, |ctx| {
            for offset in ring_offsets(self.radius_px) {
                self.stamp.stamp_at(ctx, offset);
            }
        })?;
        let blurred =
            gaussian_blur_premul(&bytes, layer.width(), layer.height(), self.radius_px as f32)?;
        layer.data_mut().copy_from_slice(&blurred);
        Ok(())
    }
}

fn ring_offsets(radius: f64) -> impl Iterator<Item = Vec2> {
    (0..RING_STAMPS).map(move |i| {
        let angle = std::f64::consts::TAU * (i as f64) / (RING_STAMPS as f64);
        Vec2::new(angle.cos() * radius, angle.sin() * radius)
    })
}

/// Run a drawing closure against a fresh vello_cpu scene and read back the
/// premultiplied pixels.
fn rasterize(
    width: u32,
    height: u32,
    f: impl FnOnce(&mut vello_cpu::RenderContext),
) -> SubpressResult<Vec<u8>> {
    let w: u16 = width
        .try_into()
        .map_err(|_| SubpressError::paint("layer width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| SubpressError::paint("layer height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    f(&mut ctx);
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap.data_as_u8_slice().to_vec())
}
