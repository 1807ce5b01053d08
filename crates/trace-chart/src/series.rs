// File: crates/trace-chart/src/series.rs
// Summary: Series model for bar, line, and scatter trace data.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    /// Bars from baseline 0 at each index (miss/access counts).
    Bar,
    /// Polyline through the samples (occupancy traces).
    Line,
    /// One marker per sample.
    Scatter,
}

/// Per-series visual style. The scripts this replaces hard-code these, so the
/// style travels with the series rather than the theme.
#[derive(Clone, Copy, Debug)]
pub struct SeriesStyle {
    pub color: skia::Color,
    /// Stroke width for Line series, in pixels. 0.0 draws a hairline.
    pub stroke_width: f32,
    /// Marker radius for Scatter series, in pixels.
    pub marker_radius: f32,
    /// Bar width as a fraction of one index slot (1.0 = touching bars).
    pub bar_width_frac: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: skia::Color::from_argb(255, 64, 160, 255),
            stroke_width: 1.5,
            marker_radius: 2.5,
            bar_width_frac: 0.8,
        }
    }
}

#[derive(Clone)]
pub struct Series {
    pub series_type: SeriesType,
    /// (index, value) points, index-ordered.
    pub points: Vec<(f64, f64)>,
    /// Legend entry; a series without a label gets no legend row.
    pub label: Option<String>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            series_type,
            points: Vec::new(),
            label: None,
            style: SeriesStyle::default(),
        }
    }

    pub fn with_points(series_type: SeriesType, points: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            points,
            label: None,
            style: SeriesStyle::default(),
        }
    }

    /// Build a series from raw trace samples, using the 0-based sample index
    /// as the x coordinate (the scripts' `x = range(len(result))`).
    pub fn from_samples(series_type: SeriesType, samples: &[i64]) -> Self {
        let points = samples
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v as f64))
            .collect();
        Self::with_points(series_type, points)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.style.color = color;
        self
    }
}
