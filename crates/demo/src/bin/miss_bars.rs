// File: crates/demo/src/bin/miss_bars.rs
// Summary: Bar chart of per-set miss/access counts from one simulator trace file.

use anyhow::{Context, Result};
use trace_chart::skia;
use trace_chart::{read_samples, Chart, RenderOptions, Series, SeriesStyle, SeriesType};

fn main() -> Result<()> {
    // Accept paths from CLI or fall back to the simulator's historical names.
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "lbm_omnetpp_access".to_string());
    let output = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "cal_set_slice_access.png".to_string());

    let samples = read_samples(&input).with_context(|| format!("failed to load '{input}'"))?;
    println!("Loaded {} samples from {}", samples.len(), input);

    let style = SeriesStyle {
        color: skia::Color::from_argb(255, 255, 0, 0),
        bar_width_frac: 1.0, // touching bars, one per set
        ..SeriesStyle::default()
    };

    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(SeriesType::Bar, &samples).with_style(style));
    chart.autoscale_axes(0.02);
    chart.x_axis.label.clear();
    chart.y_axis.label = "miss".to_string();

    let opts = RenderOptions::default();
    chart.render_to_png(&opts, &output)?;
    println!("Wrote {output}");
    Ok(())
}
