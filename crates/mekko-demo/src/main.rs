// File: crates/mekko-demo/src/main.rs
// Summary: Demo loads a transactional CSV, computes the Marimekko layout and renders it to PNG.

mod config;
mod load;

use anyhow::{Context, Result};
use clap::Parser;
use mekko_core::{theme, MarimekkoChart, RenderOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use config::{Cli, FileConfig, Settings};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => default_config_beside(&cli.input)?,
    };
    let settings = Settings::resolve(&cli, file)?;

    let dataset = load::load_csv(&cli.input)
        .with_context(|| format!("failed to load CSV '{}'", cli.input.display()))?;
    tracing::info!(rows = dataset.len(), columns = ?dataset.columns(), input = %cli.input.display(), "loaded dataset");

    let layout = settings.layout.compute(&dataset).context("computing layout")?;
    for ((label, width), total) in layout.x_labels.iter().zip(&layout.widths).zip(&layout.totals) {
        tracing::info!(bar = %label, width = *width, total = *total, "bar");
    }

    let mut chart = MarimekkoChart::new(layout)
        .with_bar_colors(settings.bar_colors)
        .with_label_colors(settings.label_colors);
    if let Some(title) = settings.title {
        chart = chart.with_title(title);
    }

    let mut opts = RenderOptions::default();
    opts.width = cli.width;
    opts.height = cli.height;
    opts.draw_labels = !cli.no_labels;
    opts.percent_axis = cli.percent_axis;
    if opts.percent_axis {
        opts.insets.left = opts.insets.left.max(48);
    }
    if let Some(name) = &settings.theme {
        opts.theme = theme::find(name);
    }

    let out = cli.out.clone().unwrap_or_else(|| out_name(&cli.input));
    chart.render_to_png(&opts, &out).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(output = %out.display(), "wrote chart");
    Ok(())
}

/// Pick up `<stem>.json` next to the CSV when no `--config` is given.
fn default_config_beside(input: &Path) -> Result<FileConfig> {
    let candidate = input.with_extension("json");
    if candidate.exists() {
        tracing::info!(config = %candidate.display(), "using config next to input");
        FileConfig::load(&candidate)
    } else {
        Ok(FileConfig::default())
    }
}

/// Produce output file name like target/out/mekko_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("mekko_{stem}.png"))
}
