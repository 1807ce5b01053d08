// File: crates/trace-chart/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types and explicit overrides.

use trace_chart::{Axis, Chart, Series, SeriesType};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();

    chart.add_series(Series::with_points(
        SeriesType::Line,
        vec![(0.0, 1.0), (5.0, 3.0)],
    ));
    chart.add_series(Series::with_points(
        SeriesType::Scatter,
        vec![(2.0, -1.0), (3.0, 6.0)],
    ));

    chart.autoscale_axes(0.0);

    // X spans 0..5 from the line vs 2..3 from the scatter => expect 0..5
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);

    // Y min from scatter (-1), max from scatter (6)
    assert!(chart.y_axis.min <= -1.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_bar_series_includes_baseline_and_slot_padding() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(SeriesType::Bar, &[3, 1, 4]));
    chart.autoscale_axes(0.0);

    // Bars at indices 0..2 get half a slot of padding on each side.
    assert!((chart.x_axis.min - (-0.5)).abs() < 1e-9);
    assert!((chart.x_axis.max - 2.5).abs() < 1e-9);

    // Baseline 0 is always inside the y range.
    assert!(chart.y_axis.min <= 0.0);
    assert!(chart.y_axis.max >= 4.0 - 1e-9);
}

#[test]
fn autoscale_empty_chart_keeps_unit_range() {
    let mut chart = Chart::new();
    chart.autoscale_axes(0.0);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
}

#[test]
fn explicit_axis_overrides_autoscale() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(SeriesType::Line, &[1, 25, 3]));
    chart.autoscale_axes(0.0);
    chart.y_axis = Axis::new("occupancy", 0.0, 12.0).with_tick_step(1.0);

    assert_eq!(chart.y_axis.min, 0.0);
    assert_eq!(chart.y_axis.max, 12.0);
    assert_eq!(chart.y_axis.tick_step, Some(1.0));
}

#[test]
fn constant_series_still_gets_nonzero_span() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_samples(SeriesType::Line, &[7, 7, 7]));
    chart.autoscale_axes(0.0);
    assert!(chart.y_axis.max > chart.y_axis.min);
}
