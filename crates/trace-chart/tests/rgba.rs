// File: crates/trace-chart/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use trace_chart::{theme, Chart, RenderOptions, Series, SeriesType};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(SeriesType::Line, &[0, 1, 2, 3, 4]));
    chart.autoscale_axes(0.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque background (white in the light theme).
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_changes_background_pixel() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(SeriesType::Scatter, &[5, 5]));
    chart.autoscale_axes(0.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = theme::find("dark");
    let (px, ..) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}

#[test]
fn unknown_theme_name_falls_back_to_light() {
    assert_eq!(theme::find("nope").name, "light");
}
