//! Subpress renders styled subtitle captions onto transparent PNG layers.
//!
//! Given a working directory containing a `config.txt` (layout, colors, font,
//! and the list of captions), subpress produces one PNG per caption. Each
//! caption is built from three stacked text layers composited bottom-up onto a
//! transparent canvas:
//!
//! 1. **Blur shadow**: the caption stamped 64 times around a circle, then
//!    gaussian-blurred.
//! 2. **Outline**: the same ring of stamps, unblurred, in the outline color.
//! 3. **Fill**: the caption itself in the font color.
//!
//! In trial mode the first caption is composited over a background photo
//! instead, for print-proofing a single frame.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Premultiplied RGBA8 end-to-end**: every surface holds premultiplied
//!   pixels; straight alpha only appears at the PNG encoding boundary.
//! - **Paint on a fresh layer, then composite**: no painter draws directly
//!   onto the shared canvas.
//! - **Fail-fast**: any configuration or resource error aborts the whole
//!   batch; files already written stay on disk.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod foundation;
mod layout;
mod render;
mod workdir;

pub use assets::font::{PreparedFont, ShapedCaption, TextBrush, TextShaper};
pub use assets::image::{PreparedImage, decode_image};
pub use config::store::{ConfigStore, Value};
pub use foundation::core::{CanvasSize, Rgba8};
pub use foundation::error::{SubpressError, SubpressResult};
pub use layout::resolve::{HAlign, VAlign, color_from_config, resolve_origin};
pub use render::blur::gaussian_blur_premul;
pub use render::painters::{
    ImagePainter, LayerPainter, TextBlurPainter, TextFillPainter, TextOutlinePainter, TextStamp,
    paint,
};
pub use render::pipeline::RenderPipeline;
pub use render::surface::Surface;
pub use workdir::{
    DEFAULT_FONT_FILE, Workdir, run_batch, run_trial, sanitize_caption_filename, save_png,
};
