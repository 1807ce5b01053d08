// File: crates/trace-chart/src/axis.rs
// Summary: Axis model with labels, ranges, and an optional fixed tick interval.

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Fixed major-tick interval; ticks land on multiples of this step.
    /// `None` falls back to an even subdivision of the range.
    pub tick_step: Option<f64>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            tick_step: None,
        }
    }

    pub fn with_tick_step(mut self, step: f64) -> Self {
        self.tick_step = if step > 0.0 { Some(step) } else { None };
        self
    }

    pub fn default_x() -> Self {
        Self::new("index", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("value", 0.0, 10.0)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
