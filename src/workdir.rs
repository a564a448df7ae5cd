use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::store::ConfigStore;
use crate::foundation::error::{SubpressError, SubpressResult};
use crate::render::pipeline::RenderPipeline;
use crate::render::surface::Surface;

/// Configuration file expected inside every working directory.
pub const CONFIG_FILE: &str = "config.txt";
/// Font file the bootstrapper offers as the `font_name` default.
pub const DEFAULT_FONT_FILE: &str = "SourceHanSansJP-Regular.otf";

const BACKGROUND_STEM: &str = "background";
const OUTPUT_DIR: &str = "output";
const TRIAL_FILE: &str = "trial.png";

/// Validated working directory: the config path plus, depending on mode,
/// either the detected background photo (trial) or a freshly emptied
/// `output/` directory (batch).
#[derive(Clone, Debug)]
pub struct Workdir {
    root: PathBuf,
    config_path: PathBuf,
    background_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl Workdir {
    /// Check the directory contract and prepare the output location.
    ///
    /// Setup errors (missing directory, missing `config.txt`, missing
    /// background in trial mode) are fatal before any work is performed.
    /// Batch mode recreates `output/` empty on every run.
    pub fn prepare(root: impl Into<PathBuf>, trial: bool) -> SubpressResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(SubpressError::validation(format!(
                "working directory does not exist: '{}'",
                root.display()
            )));
        }

        let config_path = root.join(CONFIG_FILE);
        if !config_path.is_file() {
            return Err(SubpressError::validation(format!(
                "config file does not exist: '{}'",
                config_path.display()
            )));
        }

        let background_path = if trial {
            Some(find_background(&root)?)
        } else {
            None
        };

        let output_dir = if trial {
            None
        } else {
            let dir = root.join(OUTPUT_DIR);
            match std::fs::remove_dir_all(&dir) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(SubpressError::Other(anyhow::Error::new(e).context(
                        format!("clear output directory '{}'", dir.display()),
                    )));
                }
            }
            std::fs::create_dir(&dir)
                .with_context(|| format!("create output directory '{}'", dir.display()))?;
            Some(dir)
        };

        Ok(Self {
            root,
            config_path,
            background_path,
            output_dir,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn background_path(&self) -> Option<&Path> {
        self.background_path.as_deref()
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }
}

fn find_background(root: &Path) -> SubpressResult<PathBuf> {
    // jpg is preferred over png when both exist.
    for ext in ["jpg", "png"] {
        let candidate = root.join(format!("{BACKGROUND_STEM}.{ext}"));
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(SubpressError::validation(format!(
        "background file does not exist: '{}/{BACKGROUND_STEM}.jpg' or '.png'",
        root.display()
    )))
}

/// Build the output file name for caption `index`.
///
/// `NNN_<caption>.png` with a zero-padded 3-digit index; newlines become the
/// literal `(NL)`, then every filesystem-hostile character (and ASCII or
/// ideographic spaces) becomes an underscore.
pub fn sanitize_caption_filename(index: usize, caption: &str) -> String {
    const FORBIDDEN: &[char] = &[
        '/', '>', '<', '?', ':', '"', '\\', '*', '|', ';', '~', '^', '}', ']', '{', '[', '`', '&',
        '%', '$', '#', '\'', '!', ' ', '\u{3000}',
    ];

    let name = format!("{index:03}_{caption}.png");
    let name = name.replace('\n', "(NL)");
    name.chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect()
}

/// Encode a surface as a straight-alpha RGBA PNG.
pub fn save_png(surface: &Surface, path: &Path) -> SubpressResult<()> {
    let data = surface.to_straight_rgba8();
    image::save_buffer_with_format(
        path,
        &data,
        surface.width(),
        surface.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Render every caption in `scripts` into `output/`, one PNG each.
///
/// Fail-fast: the first painter or IO failure aborts the batch; PNGs already
/// written stay on disk.
pub fn run_batch(workdir: &Workdir, cfg: &ConfigStore) -> SubpressResult<()> {
    let output_dir = workdir.output_dir().ok_or_else(|| {
        SubpressError::validation("working directory was not prepared for batch mode")
    })?;
    let scripts = cfg.get_list("scripts")?;
    let total = scripts.len();
    let mut pipeline = RenderPipeline::new(cfg)?;

    for (i, script) in scripts.iter().enumerate() {
        let fname = sanitize_caption_filename(i, script);
        println!("generate [{:3}/{:3}]: {}", i + 1, total, fname);
        let canvas = pipeline.render(script, None)?;
        save_png(&canvas, &output_dir.join(fname))?;
    }
    Ok(())
}

/// Render only `scripts[0]` over the detected background photo and write it
/// to `trial.png` in the working directory.
pub fn run_trial(workdir: &Workdir, cfg: &ConfigStore) -> SubpressResult<()> {
    let background = workdir.background_path().ok_or_else(|| {
        SubpressError::validation("working directory was not prepared for trial mode")
    })?;
    let scripts = cfg.get_list("scripts")?;
    let first = scripts
        .first()
        .ok_or_else(|| SubpressError::config("'scripts' list is empty"))?;

    let trial_path = workdir.root().join(TRIAL_FILE);
    println!("generate trial: {}", trial_path.display());

    let mut pipeline = RenderPipeline::new(cfg)?;
    let canvas = pipeline.render(first, Some(background))?;
    save_png(&canvas, &trial_path)
}

#[cfg(test)]
#[path = "../tests/unit/workdir.rs"]
mod tests;
