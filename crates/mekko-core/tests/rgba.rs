// File: crates/mekko-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and that segment pixels use key-based colors.

use mekko_core::types::Insets;
use mekko_core::{Category, ColorMap, Dataset, LayoutSpec, MarimekkoChart, RenderOptions};

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn render() -> (Vec<u8>, u32, u32, usize) {
    let ds = Dataset::new(["x", "y", "v"])
        .with_row(vec!["R1".into(), "new".into(), 100.0.into()])
        .with_row(vec!["R1".into(), "other".into(), 50.0.into()])
        .with_row(vec!["R2".into(), "new".into(), 200.0.into()]);
    let layout = LayoutSpec::new("x", "y", "v", vec![Category::from("new"), Category::from("other")])
        .compute(&ds)
        .unwrap();
    // Listed in reverse on purpose: lookups are by key, not by position.
    let bars = ColorMap::from_specs([("other", "#0000ff"), ("new", "#ff0000")]).unwrap();
    let chart = MarimekkoChart::new(layout).with_bar_colors(bars);

    let mut opts = RenderOptions::default();
    opts.width = 400;
    opts.height = 300;
    opts.insets = Insets::new(24, 24, 56, 72);
    opts.draw_labels = false; // avoid font variance
    chart.render_to_rgba8(&opts).expect("rgba render")
}

#[test]
fn render_rgba8_buffer() {
    let (px, w, h, stride) = render();
    assert_eq!((w, h), (400, 300));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background (light theme) in the top-left corner
    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255]);
}

#[test]
fn segments_fill_with_their_own_colors() {
    // Plot spans x 24..376, y 56..228. R1 covers 3/7 of the width; "new" is its lower 2/3.
    let (px, _, _, stride) = render();
    assert_eq!(pixel(&px, stride, 60, 200), [255, 0, 0, 255], "R1 base is `new`");
    assert_eq!(pixel(&px, stride, 60, 80), [0, 0, 255, 255], "R1 top is `other`");
    assert_eq!(pixel(&px, stride, 300, 80), [255, 0, 0, 255], "R2 is all `new`");
}
