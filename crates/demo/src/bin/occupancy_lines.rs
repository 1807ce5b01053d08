// File: crates/demo/src/bin/occupancy_lines.rs
// Summary: Overlaid thin-line plot of the two occupancy traces one simulator
// run produces (`<stem>_1` and `<stem>_2`).

use anyhow::{Context, Result};
use trace_chart::reader::{benchmark_labels, occupancy_pair};
use trace_chart::skia;
use trace_chart::{
    read_samples, Axis, Chart, LegendCorner, RenderOptions, Series, SeriesStyle, SeriesType,
};

// Cache geometry of the historical runs: 11 ways, so occupancy lives in 0..=11.
const OCCUPANCY_MAX: f64 = 12.0;

fn main() -> Result<()> {
    let stem = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "lbm_omnetpp_0_0_11".to_string());
    let output = std::env::args().nth(2).unwrap_or_else(|| format!("{stem}.png"));

    let (path1, path2) = occupancy_pair(&stem);
    let trace1 = read_samples(&path1)
        .with_context(|| format!("failed to load '{}'", path1.display()))?;
    let trace2 = read_samples(&path2)
        .with_context(|| format!("failed to load '{}'", path2.display()))?;
    println!(
        "Loaded {} + {} occupancy samples from {stem}_1/_2",
        trace1.len(),
        trace2.len()
    );

    let (label1, label2) = benchmark_labels(&stem);

    let thin = |color: skia::Color| SeriesStyle {
        color,
        stroke_width: 0.5, // hairline traces, as in the original figures
        ..SeriesStyle::default()
    };

    let mut chart = Chart::new();
    chart.add_series(
        Series::from_samples(SeriesType::Line, &trace1)
            .with_label(label1)
            .with_style(thin(skia::Color::from_argb(255, 255, 0, 0))),
    );
    chart.add_series(
        Series::from_samples(SeriesType::Line, &trace2)
            .with_label(label2)
            .with_style(thin(skia::Color::from_argb(255, 0, 128, 0))),
    );
    chart.autoscale_axes(0.0);
    chart.x_axis.label.clear();
    chart.y_axis = Axis::new("occupancy", 0.0, OCCUPANCY_MAX).with_tick_step(1.0);
    chart.set_legend(LegendCorner::UpperRight);
    chart.set_title(&stem);

    let opts = RenderOptions::default();
    chart.render_to_png(&opts, &output)?;
    println!("Wrote {output}");
    Ok(())
}
