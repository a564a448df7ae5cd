use std::path::PathBuf;

use clap::Parser;

use subpress::{ConfigStore, DEFAULT_FONT_FILE, Workdir, run_batch, run_trial};

/// Batch subtitle PNG generator.
#[derive(Parser, Debug)]
#[command(name = "subpress", version)]
struct Cli {
    /// Working directory containing "config.txt" (and "background.jpg/png"
    /// for trial mode).
    working_directory: PathBuf,

    /// Render only the first caption over the background image (trial print).
    #[arg(short, long)]
    trial: bool,

    /// Show debug messages.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let workdir = Workdir::prepare(cli.working_directory, cli.trial)?;

    let default_font = workdir.root().join(DEFAULT_FONT_FILE);
    let mut cfg = ConfigStore::with_default_font(default_font.to_string_lossy().into_owned());
    cfg.parse(workdir.config_path())?;
    tracing::debug!(config = ?cfg, "parsed configuration");

    if cli.trial {
        run_trial(&workdir, &cfg)?;
    } else {
        run_batch(&workdir, &cfg)?;
    }
    Ok(())
}
