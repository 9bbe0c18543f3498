//! qrcode-csv command-line entry point.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use label_render::LabelFont;
use qrcode_csv::services::{ConsoleProgress, NoProgress, ProgressObserver};
use qrcode_csv::{Cli, Settings};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_cli(Cli::parse()).context("invalid arguments")?;

    // A missing font affects every label, so fail before reading input.
    let font = LabelFont::load(&settings.text_font)
        .with_context(|| format!("cannot load font {:?}", settings.text_font))?;

    let mut progress: Box<dyn ProgressObserver> = if settings.show_progress {
        Box::new(ConsoleProgress::stdout("Generation QR Codes", "qrcode"))
    } else {
        Box::new(NoProgress)
    };

    qrcode_csv::run(&settings, &font, progress.as_mut())
        .with_context(|| format!("failed to generate QR codes from {}", settings.input.display()))?;

    Ok(())
}
