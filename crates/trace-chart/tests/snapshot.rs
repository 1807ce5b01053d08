// File: crates/trace-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow, one golden per chart shape.
// Behavior:
// - Renders a deterministic small chart to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use trace_chart::{Chart, RenderOptions, Series, SeriesStyle, SeriesType};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(
            got_img.as_raw(),
            want_img.as_raw(),
            "rendered pixels differ from golden snapshot: {}",
            path.display()
        );
    } else {
        eprintln!(
            "[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.",
            path.display()
        );
        // Skip without failing on first run
    }
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/__snapshots__")
        .join(name)
}

fn render_bytes(chart: &Chart) -> Vec<u8> {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_miss_bars() {
    let mut chart = Chart::new();
    let style = SeriesStyle {
        color: trace_chart::skia::Color::from_argb(255, 255, 0, 0),
        bar_width_frac: 1.0,
        ..SeriesStyle::default()
    };
    chart.add_series(Series::from_samples(SeriesType::Bar, &[3, 1, 4, 1, 5]).with_style(style));
    chart.autoscale_axes(0.02);

    write_or_compare(&snapshot_path("miss_bars.png"), &render_bytes(&chart));
}

#[test]
fn golden_occupancy_lines() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(SeriesType::Line, &[2, 4, 6, 5, 3, 4]));
    chart.add_series(Series::from_samples(SeriesType::Line, &[9, 7, 5, 6, 8, 7]));
    chart.autoscale_axes(0.0);
    chart.y_axis = trace_chart::Axis::new("", 0.0, 12.0).with_tick_step(1.0);

    write_or_compare(&snapshot_path("occupancy_lines.png"), &render_bytes(&chart));
}

#[test]
fn golden_occupancy_scatter() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(SeriesType::Scatter, &[2, 4, 6, 5, 3, 4]));
    chart.add_series(Series::from_samples(SeriesType::Scatter, &[9, 7, 5, 6, 8, 7]));
    chart.autoscale_axes(0.0);
    chart.y_axis = trace_chart::Axis::new("", 0.0, 12.0).with_tick_step(1.0);

    write_or_compare(&snapshot_path("occupancy_scatter.png"), &render_bytes(&chart));
}
