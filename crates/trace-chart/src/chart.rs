// File: crates/trace-chart/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::geometry::RectI32;
use crate::grid::{linspace, ticks_with_step};
use crate::legend::{legend_rect, LegendCorner, LEGEND_PAD, LEGEND_ROW_H, LEGEND_SWATCH_W};
use crate::series::{Series, SeriesType};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

// Fallback tick counts when an axis carries no explicit tick step.
const X_TICKS: usize = 10;
const Y_TICKS: usize = 6;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw tick labels, axis labels, legend text, and the title. Disabled by
    /// snapshot tests to avoid font nondeterminism across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
    pub legend: Option<LegendCorner>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
            legend: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_legend(&mut self, corner: LegendCorner) {
        self.legend = Some(corner);
    }

    /// Derive axis ranges from all series, padding both ends of the y range by
    /// `margin_frac` of the span. Bar series pull the y range to include 0 so
    /// bars keep their baseline, and widen x by half a slot on each side.
    /// Explicitly assigned axes afterwards override this.
    pub fn autoscale_axes(&mut self, margin_frac: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut any_bar = false;
        for s in &self.series {
            if s.series_type == SeriesType::Bar && !s.points.is_empty() {
                any_bar = true;
                y_min = y_min.min(0.0);
                y_max = y_max.max(0.0);
            }
            for &(x, y) in &s.points {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            // No data at all: keep a unit range so the chrome still renders.
            x_min = 0.0;
            x_max = 1.0;
            y_min = 0.0;
            y_max = 1.0;
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        if any_bar {
            x_min -= 0.5;
            x_max += 0.5;
        }
        let ym = (y_max - y_min) * margin_frac;
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render and return the PNG-encoded bytes without touching the filesystem.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and return raw RGBA8 pixels as (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(opts.theme.background);

        let plot = RectI32::from_ltrb(
            opts.insets.left as i32,
            opts.insets.top as i32,
            opts.width - opts.insets.right as i32,
            opts.height - opts.insets.bottom as i32,
        );

        let x_ticks = axis_ticks(&self.x_axis, X_TICKS);
        let y_ticks = axis_ticks(&self.y_axis, Y_TICKS);

        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, &opts.theme);

        // Clip series marks to the plot rect so explicit axis limits crop,
        // matching how the original figures treated out-of-range values.
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(
                plot.left as f32,
                plot.top as f32,
                plot.right as f32,
                plot.bottom as f32,
            ),
            skia::ClipOp::Intersect,
            true,
        );
        for s in &self.series {
            match s.series_type {
                SeriesType::Bar => draw_bar_series(canvas, &plot, &self.x_axis, &self.y_axis, s),
                SeriesType::Line => draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s),
                SeriesType::Scatter => {
                    draw_scatter_series(canvas, &plot, &self.x_axis, &self.y_axis, s)
                }
            }
        }
        canvas.restore();

        draw_axes(
            canvas,
            &plot,
            &self.x_axis,
            &self.y_axis,
            &x_ticks,
            &y_ticks,
            &opts.theme,
            opts.draw_labels,
        );

        if opts.draw_labels {
            if let Some(corner) = self.legend {
                draw_legend(canvas, &plot, corner, &self.series, &opts.theme);
            }
            if let Some(title) = &self.title {
                draw_title(canvas, &plot, title, &opts.theme);
            }
        }

        Ok(surface)
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn axis_ticks(axis: &Axis, fallback_steps: usize) -> Vec<f64> {
    match axis.tick_step {
        Some(step) => ticks_with_step(axis.min, axis.max, step),
        None => linspace(axis.min, axis.max, fallback_steps),
    }
}

/// Pixel-mapping closures for the plot rect. Kept as a pair so every draw
/// helper scales the same way.
fn scalers<'a>(
    plot: &'a RectI32,
    x_axis: &'a Axis,
    y_axis: &'a Axis,
) -> (impl Fn(f64) -> f32 + 'a, impl Fn(f64) -> f32 + 'a) {
    let xspan = x_axis.span().max(1e-9);
    let yspan = y_axis.span().max(1e-9);
    let sx = move |x: f64| -> f32 {
        plot.left as f32 + ((x - x_axis.min) / xspan) as f32 * plot.width() as f32
    };
    let sy = move |y: f64| -> f32 {
        plot.bottom as f32 - ((y - y_axis.min) / yspan) as f32 * plot.height() as f32
    };
    (sx, sy)
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (sx, sy) = scalers(plot, x_axis, y_axis);

    for &t in x_ticks {
        let x = sx(t);
        canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &paint);
    }
    for &t in y_ticks {
        let y = sy(t);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
    draw_labels: bool,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (
        plot.left as f32,
        plot.top as f32,
        plot.right as f32,
        plot.bottom as f32,
    );

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let mut paint_text = skia::Paint::default();
    paint_text.set_color(theme.axis_label);
    paint_text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(13.0);

    let (sx, sy) = scalers(plot, x_axis, y_axis);

    // Tick marks and numeric labels
    for &tv in x_ticks {
        let x = sx(tv);
        canvas.draw_line((x, b), (x, b + 5.0), &tick_paint);
        if draw_labels {
            let label = format_tick(tv);
            let (w, _) = font.measure_str(&label, Some(&paint_text));
            canvas.draw_str(&label, (x - w * 0.5, b + 20.0), &font, &paint_text);
        }
    }
    for &tv in y_ticks {
        let y = sy(tv);
        canvas.draw_line((l - 5.0, y), (l, y), &tick_paint);
        if draw_labels {
            let label = format_tick(tv);
            let (w, _) = font.measure_str(&label, Some(&paint_text));
            canvas.draw_str(&label, (l - 9.0 - w, y + 4.0), &font, &paint_text);
        }
    }

    // Axis labels
    if draw_labels {
        let mut label_font = skia::Font::default();
        label_font.set_size(14.0);
        if !x_axis.label.is_empty() {
            let (w, _) = label_font.measure_str(&x_axis.label, Some(&paint_text));
            let cx = (l + r) * 0.5 - w * 0.5;
            canvas.draw_str(&x_axis.label, (cx, b + 40.0), &label_font, &paint_text);
        }
        if !y_axis.label.is_empty() {
            // Rotated 90 degrees counter-clockwise along the left edge.
            let (w, _) = label_font.measure_str(&y_axis.label, Some(&paint_text));
            let cy = (t + b) * 0.5 + w * 0.5;
            canvas.save();
            canvas.translate((l - 44.0, cy));
            canvas.rotate(-90.0, None);
            canvas.draw_str(&y_axis.label, (0.0, 0.0), &label_font, &paint_text);
            canvas.restore();
        }
    }
}

fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.1}")
    }
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
) {
    if series.points.is_empty() {
        return;
    }

    let (sx, sy) = scalers(plot, x_axis, y_axis);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(false); // crisp, touching bars
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(series.style.color);

    // One index slot in pixels; the bar occupies `bar_width_frac` of it,
    // centered on the sample index.
    let slot_px = plot.width() as f32 / x_axis.span().max(1e-9) as f32;
    let half = (slot_px * series.style.bar_width_frac * 0.5).max(0.5);

    let y0 = sy(0.0);
    for &(x, y) in &series.points {
        let cx = sx(x);
        let yv = sy(y);
        let (top, bot) = if yv <= y0 { (yv, y0) } else { (y0, yv) };
        let rect = skia::Rect::from_ltrb(cx - half, top, cx + half, bot);
        canvas.draw_rect(rect, &fill);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
) {
    if series.points.len() < 2 {
        return;
    }

    let (sx, sy) = scalers(plot, x_axis, y_axis);

    let mut path = skia::Path::new();
    let (x0, y0) = series.points[0];
    path.move_to((sx(x0), sy(y0)));
    for &(x, y) in series.points.iter().skip(1) {
        path.line_to((sx(x), sy(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.style.stroke_width);
    stroke.set_color(series.style.color);

    canvas.draw_path(&path, &stroke);
}

fn draw_scatter_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
) {
    if series.points.is_empty() {
        return;
    }

    let (sx, sy) = scalers(plot, x_axis, y_axis);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(series.style.color);

    let radius = series.style.marker_radius.max(0.5);
    for &(x, y) in &series.points {
        canvas.draw_circle((sx(x), sy(y)), radius, &fill);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    plot: &RectI32,
    corner: LegendCorner,
    series: &[Series],
    theme: &Theme,
) {
    let labeled: Vec<&Series> = series.iter().filter(|s| s.label.is_some()).collect();
    if labeled.is_empty() {
        return;
    }

    let mut paint_text = skia::Paint::default();
    paint_text.set_color(theme.axis_label);
    paint_text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(13.0);

    let mut max_label_w = 0.0f32;
    for s in &labeled {
        let label = s.label.as_deref().unwrap_or_default();
        let (w, _) = font.measure_str(label, Some(&paint_text));
        max_label_w = max_label_w.max(w);
    }
    let width = LEGEND_SWATCH_W + 8 + max_label_w.ceil() as i32 + 2 * LEGEND_PAD;
    let rect = legend_rect(plot, corner, labeled.len() as i32, width);

    let skrect = skia::Rect::from_ltrb(
        rect.left as f32,
        rect.top as f32,
        rect.right as f32,
        rect.bottom as f32,
    );
    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_style(skia::paint::Style::Fill);
    bg.set_color(theme.legend_background);
    canvas.draw_rect(skrect, &bg);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rect(skrect, &border);

    for (i, s) in labeled.iter().enumerate() {
        let row_top = rect.top + LEGEND_PAD + i as i32 * LEGEND_ROW_H;
        let cy = row_top as f32 + LEGEND_ROW_H as f32 * 0.5;
        let sw_l = (rect.left + LEGEND_PAD) as f32;
        let sw_r = sw_l + LEGEND_SWATCH_W as f32;

        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_color(s.style.color);
        match s.series_type {
            SeriesType::Line => {
                swatch.set_style(skia::paint::Style::Stroke);
                swatch.set_stroke_width(s.style.stroke_width.max(1.5));
                canvas.draw_line((sw_l, cy), (sw_r, cy), &swatch);
            }
            SeriesType::Scatter => {
                swatch.set_style(skia::paint::Style::Fill);
                let r = s.style.marker_radius.max(2.0);
                canvas.draw_circle(((sw_l + sw_r) * 0.5, cy), r, &swatch);
            }
            SeriesType::Bar => {
                swatch.set_style(skia::paint::Style::Fill);
                let sk = skia::Rect::from_ltrb(sw_l, cy - 5.0, sw_r, cy + 5.0);
                canvas.draw_rect(sk, &swatch);
            }
        }

        let label = s.label.as_deref().unwrap_or_default();
        canvas.draw_str(label, (sw_r + 8.0, cy + 4.5), &font, &paint_text);
    }
}

fn draw_title(canvas: &skia::Canvas, plot: &RectI32, title: &str, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.title);
    paint.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(18.0);
    let (w, _) = font.measure_str(title, Some(&paint));
    let cx = (plot.left + plot.right) as f32 * 0.5 - w * 0.5;
    canvas.draw_str(title, (cx, plot.top as f32 - 12.0), &font, &paint);
}
