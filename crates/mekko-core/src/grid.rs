// File: crates/mekko-core/src/grid.rs
// Summary: Tick layout helpers for the optional percentage axis.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Percentage tick values and their labels over the unit y range: 0%, 25%, ... 100%.
pub fn percent_ticks(steps: usize) -> Vec<(f64, String)> {
    linspace(0.0, 1.0, steps)
        .into_iter()
        .map(|v| (v, format!("{:.0}%", v * 100.0)))
        .collect()
}
