// File: crates/trace-chart/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Major tick positions at multiples of `step` inside `[min, max]`.
/// Mirrors a fixed-interval tick locator: the first tick is the smallest
/// multiple of `step` at or above `min`.
pub fn ticks_with_step(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || max < min {
        return Vec::new();
    }
    let mut ticks = Vec::new();
    let mut k = (min / step).ceil();
    // Tolerate fp error at the boundaries.
    let eps = step * 1e-9;
    if (k - 1.0) * step >= min - eps {
        k -= 1.0;
    }
    loop {
        let t = k * step;
        if t > max + eps {
            break;
        }
        if t >= min - eps {
            ticks.push(t);
        }
        k += 1.0;
    }
    ticks
}
