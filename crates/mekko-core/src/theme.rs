// File: crates/mekko-core/src/theme.rs
// Summary: Light/Dark theming for Marimekko rendering colors and the default segment palette.

use skia_safe as skia;

const fn rgb(r: u8, g: u8, b: u8) -> skia::Color {
    skia::Color::new(0xff00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
}

/// Ten-color categorical palette (plotly's default sequence), used when a y-category has no
/// explicit bar color.
pub const CATEGORICAL: [skia::Color; 10] = [
    rgb(0x63, 0x6e, 0xfa),
    rgb(0xef, 0x55, 0x3b),
    rgb(0x00, 0xcc, 0x96),
    rgb(0xab, 0x63, 0xfa),
    rgb(0xff, 0xa1, 0x5a),
    rgb(0x19, 0xd3, 0xf3),
    rgb(0xff, 0x66, 0x92),
    rgb(0xb6, 0xe8, 0x80),
    rgb(0xff, 0x97, 0xff),
    rgb(0xfe, 0xcb, 0x52),
];

/// Solarized accents, for the solarized presets.
const SOLARIZED: [skia::Color; 8] = [
    rgb(0x26, 0x8b, 0xd2), // blue
    rgb(0xcb, 0x4b, 0x16), // orange
    rgb(0x85, 0x99, 0x00), // green
    rgb(0x6c, 0x71, 0xc4), // violet
    rgb(0xb5, 0x89, 0x00), // yellow
    rgb(0x2a, 0xa1, 0x98), // cyan
    rgb(0xdc, 0x32, 0x2f), // red
    rgb(0xd3, 0x36, 0x82), // magenta
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub legend_label: skia::Color,
    /// Stroke drawn around each segment; usually the background so segments read as separate.
    pub segment_outline: skia::Color,
    pub palette: &'static [skia::Color],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            tick_label: skia::Color::from_argb(255, 42, 63, 95),
            title: skia::Color::from_argb(255, 42, 63, 95),
            legend_label: skia::Color::from_argb(255, 42, 63, 95),
            segment_outline: skia::Color::from_argb(255, 255, 255, 255),
            palette: &CATEGORICAL,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_label: skia::Color::from_argb(255, 210, 210, 220),
            segment_outline: skia::Color::from_argb(255, 18, 18, 20),
            palette: &CATEGORICAL,
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            tick_label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            title: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),
            legend_label: skia::Color::from_argb(255, 0x83, 0x94, 0x96), // base0
            segment_outline: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            palette: &SOLARIZED,
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83), // base00
            tick_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            title: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            legend_label: skia::Color::from_argb(255, 0x58, 0x6e, 0x75), // base01
            segment_outline: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3),
            palette: &SOLARIZED,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            legend_label: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            segment_outline: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            palette: &CATEGORICAL,
        }
    }

    /// Palette color for the `index`-th series, cycling when the palette runs out.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
