// File: crates/trace-chart/src/lib.rs
// Summary: Core library entry point; exports public API for reading trace
// samples and rendering bar/line/scatter charts.

pub mod axis;
pub mod chart;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod reader;
pub mod series;
pub mod theme;
pub mod types;

// Re-export the backend so callers can name colors without depending on it.
pub use skia_safe as skia;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use legend::LegendCorner;
pub use reader::{read_samples, ReadError};
pub use series::{Series, SeriesStyle, SeriesType};
pub use theme::Theme;
