// File: crates/mekko-core/src/color.rs
// Summary: Color spec parsing (CSS-style strings) and key-addressed color overrides.

use std::collections::BTreeMap;

use skia_safe as skia;

use crate::category::Category;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("unrecognized color `{0}`")]
    Unrecognized(String),
    #[error("color component out of range in `{0}`")]
    OutOfRange(String),
}

const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
    ("navy", [0, 0, 128]),
    ("teal", [0, 128, 128]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("silver", [192, 192, 192]),
    ("steelblue", [70, 130, 180]),
    ("lightsteelblue", [176, 196, 222]),
    ("cornflowerblue", [100, 149, 237]),
    ("goldenrod", [218, 165, 32]),
    ("crimson", [220, 20, 60]),
    ("seagreen", [46, 139, 87]),
];

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`, `rgba(r, g, b, a)` (alpha in 0..=1)
/// or a CSS color name.
pub fn parse_color(spec: &str) -> Result<skia::Color, ColorError> {
    let s = spec.trim().to_ascii_lowercase();
    if s == "transparent" {
        return Ok(skia::Color::TRANSPARENT);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::Unrecognized(spec.to_string()));
    }
    if let Some(args) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        return parse_functional(args, true, spec);
    }
    if let Some(args) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        return parse_functional(args, false, spec);
    }
    NAMED
        .iter()
        .find(|(name, _)| *name == s)
        .map(|(_, [r, g, b])| skia::Color::from_rgb(*r, *g, *b))
        .ok_or_else(|| ColorError::Unrecognized(spec.to_string()))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let v = u16::from_str_radix(hex, 16).ok()?;
            let n = |shift: u16| ((v >> shift) & 0xf) as u8 * 17;
            Some(skia::Color::from_rgb(n(8), n(4), n(0)))
        }
        6 => Some(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn parse_functional(args: &str, with_alpha: bool, spec: &str) -> Result<skia::Color, ColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != if with_alpha { 4 } else { 3 } {
        return Err(ColorError::Unrecognized(spec.to_string()));
    }
    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        let v: f64 = part.parse().map_err(|_| ColorError::Unrecognized(spec.to_string()))?;
        if !(0.0..=255.0).contains(&v) {
            return Err(ColorError::OutOfRange(spec.to_string()));
        }
        *slot = v.round() as u8;
    }
    let alpha = if with_alpha {
        let a: f64 = parts[3].parse().map_err(|_| ColorError::Unrecognized(spec.to_string()))?;
        if !(0.0..=1.0).contains(&a) {
            return Err(ColorError::OutOfRange(spec.to_string()));
        }
        (a * 255.0).round() as u8
    } else {
        255
    };
    Ok(skia::Color::from_argb(alpha, rgb[0], rgb[1], rgb[2]))
}

/// Relative luminance in [0, 1] (sRGB coefficients, no gamma), used to pick readable text.
pub fn luminance(c: skia::Color) -> f32 {
    (0.2126 * c.r() as f32 + 0.7152 * c.g() as f32 + 0.0722 * c.b() as f32) / 255.0
}

/// Black or white, whichever reads better on `fill`.
pub fn contrasting_text(fill: skia::Color) -> skia::Color {
    if luminance(fill) > 0.55 { skia::Color::BLACK } else { skia::Color::WHITE }
}

/// Colors keyed by y-category. Lookups always go by key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorMap {
    colors: BTreeMap<Category, skia::Color>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(category, spec)` pairs; the first unparseable spec fails the whole map.
    ///
    /// `&str`/`String` keys become `Category::Text` as given. For keys read from text that may
    /// name numeric categories (years, codes), use [`ColorMap::from_spec_strs`].
    pub fn from_specs<I, C, S>(pairs: I) -> Result<Self, ColorError>
    where
        I: IntoIterator<Item = (C, S)>,
        C: Into<Category>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (key, spec) in pairs {
            map.insert(key, parse_color(spec.as_ref())?);
        }
        Ok(map)
    }

    /// Build from `(key, spec)` text pairs, inferring each key with [`Category::parse`] so
    /// `"2020"` matches a numeric y-category and `""` matches `Missing`.
    pub fn from_spec_strs<I, K, S>(pairs: I) -> Result<Self, ColorError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: AsRef<str>,
    {
        Self::from_specs(pairs.into_iter().map(|(k, spec)| (Category::parse(k.as_ref()), spec)))
    }

    pub fn insert(&mut self, key: impl Into<Category>, color: skia::Color) {
        self.colors.insert(key.into(), color);
    }

    pub fn get(&self, key: &Category) -> Option<skia::Color> {
        self.colors.get(key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Category> + '_ {
        self.colors.keys()
    }
}
