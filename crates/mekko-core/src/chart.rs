// File: crates/mekko-core/src/chart.rs
// Summary: MarimekkoChart and the headless rendering pipeline (PNG file, PNG bytes, RGBA8) using
// Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::color::{contrasting_text, ColorMap};
use crate::geometry::{self, PlotRect};
use crate::grid::percent_ticks;
use crate::layout::LayoutBundle;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text on/off. Off gives pixel-stable output (no font variance across platforms).
    pub draw_labels: bool,
    /// Size for tick, legend and segment text.
    pub font_size: f32,
    pub title_size: f32,
    /// Draw 0..100% ticks and grid lines on the y axis.
    pub percent_axis: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            font_size: 12.0,
            title_size: 18.0,
            percent_axis: false,
        }
    }
}

/// A computed layout plus its presentation settings.
///
/// Rendering reads the bundle and never changes it; one chart can be rendered any number of
/// times with different options.
#[derive(Clone, Debug)]
pub struct MarimekkoChart {
    pub layout: LayoutBundle,
    pub title: Option<String>,
    /// Segment fill overrides by y-category.
    pub bar_colors: ColorMap,
    /// Segment text color overrides by y-category.
    pub label_colors: ColorMap,
}

impl MarimekkoChart {
    pub fn new(layout: LayoutBundle) -> Self {
        Self { layout, title: None, bar_colors: ColorMap::new(), label_colors: ColorMap::new() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_bar_colors(mut self, colors: ColorMap) -> Self {
        self.bar_colors = colors;
        self
    }

    pub fn with_label_colors(mut self, colors: ColorMap) -> Self {
        self.label_colors = colors;
        self
    }

    /// Fill for stack layer `series`: the override for its key, else the theme palette.
    pub fn bar_color(&self, series: usize, theme: &Theme) -> skia::Color {
        let key = &self.layout.series[series].category;
        self.bar_colors.get(key).unwrap_or_else(|| theme.series_color(series))
    }

    /// Text color for stack layer `series` drawn over `fill`.
    pub fn label_color(&self, series: usize, fill: skia::Color) -> skia::Color {
        let key = &self.layout.series[series].category;
        self.label_colors.get(key).unwrap_or_else(|| contrasting_text(fill))
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to an in-memory PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to straight-alpha RGBA8 pixels. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = info.min_row_bytes();
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading surface pixels failed");
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            anyhow::bail!("surface size must be positive, got {}x{}", opts.width, opts.height);
        }
        let started = std::time::Instant::now();
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        tracing::debug!(
            bars = self.layout.len(),
            width = opts.width,
            height = opts.height,
            elapsed_us = started.elapsed().as_micros() as u64,
            "rasterized chart"
        );
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        self.warn_unused_overrides();
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = opts.insets.plot_rect(opts.width, opts.height);
        let shaper = opts.draw_labels.then(TextShaper::new);

        if opts.percent_axis {
            draw_percent_axis(canvas, &plot, theme, shaper.as_ref(), opts.font_size);
        }
        self.draw_segments(canvas, &plot, theme, shaper.as_ref(), opts.font_size);
        draw_baseline(canvas, &plot, theme);

        if let Some(shaper) = &shaper {
            self.draw_ticks(canvas, &plot, theme, shaper, opts.font_size);
            self.draw_legend(canvas, &plot, opts, shaper);
            if let Some(title) = &self.title {
                let y = (opts.insets.top as f32 * 0.5 + opts.title_size * 0.5).max(opts.title_size);
                shaper.draw_left(canvas, title, plot.left as f32, y, opts.title_size, theme.title, false);
            }
        }
    }

    fn draw_segments(
        &self,
        canvas: &skia::Canvas,
        plot: &PlotRect,
        theme: &Theme,
        shaper: Option<&TextShaper>,
        font_size: f32,
    ) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        let mut outline = skia::Paint::default();
        outline.set_anti_alias(true);
        outline.set_style(skia::paint::Style::Stroke);
        outline.set_stroke_width(1.0);
        outline.set_color(theme.segment_outline);

        for seg in geometry::segments(&self.layout) {
            let (l, t, r, b) = plot.map(&seg.rect);
            let rect = skia::Rect::from_ltrb(l, t, r, b);
            let color = self.bar_color(seg.series, theme);
            fill.set_color(color);
            canvas.draw_rect(rect, &fill);
            canvas.draw_rect(rect, &outline);

            let Some(shaper) = shaper else { continue };
            let Some(text) = self.layout.series[seg.series].label_text(seg.x) else { continue };
            // Hide text that would spill out of its segment.
            let (tw, th) = shaper.measure(&text, font_size, true);
            if tw + 4.0 > r - l || th > b - t {
                continue;
            }
            let (cx, cy) = ((l + r) * 0.5, (t + b) * 0.5);
            shaper.draw_centered(canvas, &text, cx, cy, font_size, self.label_color(seg.series, color), true);
        }
    }

    fn draw_ticks(&self, canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme, shaper: &TextShaper, font_size: f32) {
        let y = plot.bottom as f32 + 6.0 + font_size;
        for (label, pos) in self.layout.x_labels.iter().zip(self.layout.tick_positions()) {
            let text = label.to_string();
            let w = shaper.measure_width(&text, font_size, false);
            shaper.draw_left(canvas, &text, plot.x_px(pos) - w * 0.5, y, font_size, theme.tick_label, false);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, plot: &PlotRect, opts: &RenderOptions, shaper: &TextShaper) {
        let size = opts.font_size;
        let swatch = size;
        let gap = size * 0.4;
        let spacing = size * 1.5;

        let entries: Vec<(String, f32)> = self
            .layout
            .y_categories()
            .map(|c| {
                let text = c.to_string();
                let w = shaper.measure_width(&text, size, false);
                (text, w)
            })
            .collect();
        let total: f32 = entries.iter().map(|(_, w)| swatch + gap + w).sum::<f32>()
            + spacing * entries.len().saturating_sub(1) as f32;

        let center = (plot.left + plot.right) as f32 * 0.5;
        let mut x = center - total * 0.5;
        let baseline = plot.bottom as f32 + 6.0 + size * 3.0;

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        for (i, (text, w)) in entries.iter().enumerate() {
            paint.set_color(self.bar_color(i, &opts.theme));
            canvas.draw_rect(skia::Rect::from_xywh(x, baseline - swatch * 0.85, swatch, swatch), &paint);
            x += swatch + gap;
            shaper.draw_left(canvas, text, x, baseline, size, opts.theme.legend_label, false);
            x += w + spacing;
        }
    }

    fn warn_unused_overrides(&self) {
        for (kind, map) in [("bar", &self.bar_colors), ("label", &self.label_colors)] {
            for key in map.keys() {
                if self.layout.series_for(key).is_none() {
                    tracing::warn!(category = %key, kind, "color override for a y-category that is not in the chart");
                }
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_baseline(canvas: &skia::Canvas, plot: &PlotRect, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    let (l, r, b) = (plot.left as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
}

fn draw_percent_axis(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    theme: &Theme,
    shaper: Option<&TextShaper>,
    font_size: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for (v, label) in percent_ticks(5) {
        let y = plot.y_px(v);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
        if let Some(shaper) = shaper {
            let w = shaper.measure_width(&label, font_size, true);
            shaper.draw_left(canvas, &label, plot.left as f32 - w - 4.0, y + font_size * 0.35, font_size, theme.tick_label, true);
        }
    }
}
