// File: crates/trace-chart/src/legend.rs
// Summary: Legend corner placement inside the plot rect.

use crate::geometry::{clamp, RectI32};

/// Which corner of the plot area hosts the legend box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendCorner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

pub const LEGEND_PAD: i32 = 8;
pub const LEGEND_ROW_H: i32 = 20;
pub const LEGEND_SWATCH_W: i32 = 22;

/// Compute the legend box for `rows` entries, `width` pixels wide, anchored
/// in `corner` of `plot` with a fixed inset.
pub fn legend_rect(plot: &RectI32, corner: LegendCorner, rows: i32, width: i32) -> RectI32 {
    let height = rows * LEGEND_ROW_H + 2 * LEGEND_PAD;
    let inset = 10;
    let (left, top) = match corner {
        LegendCorner::UpperRight => (plot.right - inset - width, plot.top + inset),
        LegendCorner::UpperLeft => (plot.left + inset, plot.top + inset),
        LegendCorner::LowerLeft => (plot.left + inset, plot.bottom - inset - height),
        LegendCorner::LowerRight => (plot.right - inset - width, plot.bottom - inset - height),
    };
    // Small plots: keep the box pinned inside the plot rect.
    let left = clamp(left, plot.left, (plot.right - width).max(plot.left));
    let top = clamp(top, plot.top, (plot.bottom - height).max(plot.top));
    RectI32::from_ltwh(left, top, width, height)
}
