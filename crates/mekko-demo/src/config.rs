// File: crates/mekko-demo/src/config.rs
// Summary: Command-line flags and the optional JSON chart config; flags override file values.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mekko_core::{Category, ColorMap, LayoutSpec, SortPolicy, TotalPolicy, DEFAULT_DISPLAY_DIVISOR};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortArg {
    /// Ascending by x-category
    Category,
    /// Descending by bar total
    Value,
}

impl From<SortArg> for SortPolicy {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Category => SortPolicy::ByXCategory,
            SortArg::Value => SortPolicy::ByTotalValueDesc,
        }
    }
}

/// Render a Marimekko chart from a CSV file.
#[derive(Debug, Parser)]
#[command(name = "mekko-demo", version)]
pub struct Cli {
    /// Input CSV (headered)
    #[arg(default_value = "crates/mekko-demo/data/new_business.csv")]
    pub input: PathBuf,
    /// JSON chart config; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Column forming one bar per distinct value
    #[arg(long = "x")]
    pub x_key: Option<String>,
    /// Column forming the stacked segments
    #[arg(long = "y")]
    pub y_key: Option<String>,
    /// Numeric column to sum
    #[arg(long = "value")]
    pub value_key: Option<String>,
    /// Y-categories in stack order, bottom first
    #[arg(long, value_delimiter = ',')]
    pub y_categories: Vec<String>,
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,
    /// Labels show subtotal / divisor, rounded
    #[arg(long)]
    pub divisor: Option<f64>,
    /// Only count listed y-categories in bar totals; `--listed-totals=false` overrides the file
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub listed_totals: Option<bool>,
    #[arg(long)]
    pub title: Option<String>,
    /// Segment fill override, KEY=SPEC (repeatable)
    #[arg(long = "bar-color", value_parser = parse_pair)]
    pub bar_colors: Vec<(String, String)>,
    /// Segment text color override, KEY=SPEC (repeatable)
    #[arg(long = "label-color", value_parser = parse_pair)]
    pub label_colors: Vec<(String, String)>,
    #[arg(long)]
    pub theme: Option<String>,
    #[arg(long, default_value_t = mekko_core::types::WIDTH)]
    pub width: i32,
    #[arg(long, default_value_t = mekko_core::types::HEIGHT)]
    pub height: i32,
    /// Skip all text (titles, ticks, legend, values)
    #[arg(long)]
    pub no_labels: bool,
    /// Show 0..100% ticks on the y axis
    #[arg(long)]
    pub percent_axis: bool,
    /// Output PNG; defaults to target/out/mekko_<input stem>.png
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (k, v) = s.split_once('=').ok_or_else(|| format!("expected KEY=SPEC, got `{s}`"))?;
    Ok((k.trim().to_string(), v.trim().to_string()))
}

/// On-disk chart settings. Every field is optional so a file can hold just the colors.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub x_key: Option<String>,
    pub y_key: Option<String>,
    pub value_key: Option<String>,
    pub y_categories: Vec<String>,
    pub sort: Option<SortArg>,
    pub display_divisor: Option<f64>,
    pub listed_totals: Option<bool>,
    pub title: Option<String>,
    /// Ordered pairs so the file reads like the legend.
    pub bar_colors: Vec<(String, String)>,
    pub label_colors: Vec<(String, String)>,
    pub theme: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Settings after merging file and flags.
#[derive(Debug)]
pub struct Settings {
    pub layout: LayoutSpec,
    pub title: Option<String>,
    pub bar_colors: ColorMap,
    pub label_colors: ColorMap,
    pub theme: Option<String>,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self> {
        let x_key = cli.x_key.clone().or(file.x_key).context("no x column: pass --x or set x_key")?;
        let y_key = cli.y_key.clone().or(file.y_key).context("no y column: pass --y or set y_key")?;
        let value_key = cli
            .value_key
            .clone()
            .or(file.value_key)
            .context("no value column: pass --value or set value_key")?;
        let names = if cli.y_categories.is_empty() { file.y_categories } else { cli.y_categories.clone() };
        let y_categories = names.iter().map(|n| Category::parse(n)).collect();

        let sort = cli.sort.or(file.sort).unwrap_or(SortArg::Category);
        let divisor = cli.divisor.or(file.display_divisor).unwrap_or(DEFAULT_DISPLAY_DIVISOR);
        let totals = if cli.listed_totals.or(file.listed_totals).unwrap_or(false) {
            TotalPolicy::ListedCategories
        } else {
            TotalPolicy::AllRecords
        };

        let bar_pairs = if cli.bar_colors.is_empty() { file.bar_colors } else { cli.bar_colors.clone() };
        let label_pairs = if cli.label_colors.is_empty() { file.label_colors } else { cli.label_colors.clone() };

        Ok(Self {
            layout: LayoutSpec::new(x_key, y_key, value_key, y_categories)
                .with_sort(sort.into())
                .with_display_divisor(divisor)
                .with_total_policy(totals),
            title: cli.title.clone().or(file.title),
            bar_colors: color_map(&bar_pairs).context("bar colors")?,
            label_colors: color_map(&label_pairs).context("label colors")?,
            theme: cli.theme.clone().or(file.theme),
        })
    }
}

fn color_map(pairs: &[(String, String)]) -> Result<ColorMap> {
    Ok(ColorMap::from_spec_strs(pairs.iter().map(|(k, v)| (k, v)))?)
}
