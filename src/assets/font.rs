use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{SubpressError, SubpressResult};

/// Brush placeholder carried through Parley layouts.
///
/// Subpress stamps the same shaped caption in several colors (fill, outline,
/// blur shadow), so the paint color is chosen by each painter at draw time
/// and the layout itself stays color-free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush;

/// Font file loaded once per pipeline: raw bytes plus the rasterizer handle.
#[derive(Clone)]
pub struct PreparedFont {
    bytes: Arc<Vec<u8>>,
    data: vello_cpu::peniko::FontData,
}

impl PreparedFont {
    /// Read a TTF/OTF file from disk. An unreadable path is fatal.
    pub fn load(path: &Path) -> SubpressResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font file '{}'", path.display()))?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let bytes = Arc::new(bytes);
        let data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.as_ref().clone()), 0);
        Self { bytes, data }
    }

    pub fn bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    pub fn data(&self) -> &vello_cpu::peniko::FontData {
        &self.data
    }
}

impl std::fmt::Debug for PreparedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedFont")
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

/// Shaped caption: the Parley layout plus its measured pixel block size.
///
/// Must be rebuilt whenever the caption text or font changes; it is never
/// cached across captions.
pub struct ShapedCaption {
    /// Fully built text layout ready for glyph rasterization.
    pub layout: parley::Layout<TextBrush>,
    /// Widest line advance, floored at 1.0.
    pub width: f64,
    /// Sum of line heights (ascent + descent + leading), floored at 1.0.
    pub height: f64,
}

impl std::fmt::Debug for ShapedCaption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedCaption")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out a caption. Embedded `\n` produce hard line breaks,
    /// so multi-line captions are measured and drawn as one block.
    pub fn shape(
        &mut self,
        text: &str,
        font: &PreparedFont,
        size_px: f32,
    ) -> SubpressResult<ShapedCaption> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(SubpressError::validation(
                "font_size must be finite and > 0",
            ));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes().to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            SubpressError::validation("no font families registered from font bytes")
        })?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SubpressError::validation("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);

        let (width, height) = measure_block(&layout);
        Ok(ShapedCaption {
            layout,
            width,
            height,
        })
    }
}

fn measure_block(layout: &parley::Layout<TextBrush>) -> (f64, f64) {
    let mut w = 0.0f64;
    let mut h = 0.0f64;
    for line in layout.lines() {
        let m = line.metrics();
        w = w.max(f64::from(m.advance));
        h += f64::from(m.ascent + m.descent + m.leading);
    }
    (w.max(1.0), h.max(1.0))
}
