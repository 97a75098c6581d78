// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, tick placement and tick formatting.

use skia_safe as skia;

use crate::grid::{nice_ticks, step_ticks, step_ticks_from};

/// How tick values are rendered as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Integers without decimals, anything else with up to two decimals.
    Plain,
    /// Fixed number of decimals.
    Decimal(usize),
    /// Value followed by a percent sign.
    Percent,
    /// Value divided by 1e3 with a `k` suffix.
    Thousands,
    /// Value divided by 1e6 with an `M` suffix.
    Millions,
}

impl TickFormat {
    pub fn format(&self, v: f64) -> String {
        match *self {
            TickFormat::Plain => {
                if (v - v.round()).abs() < 1e-9 {
                    format!("{}", v.round() as i64)
                } else {
                    let s = format!("{:.2}", v);
                    s.trim_end_matches('0').trim_end_matches('.').to_string()
                }
            }
            TickFormat::Decimal(n) => format!("{:.*}", n, v),
            TickFormat::Percent => format!("{}%", TickFormat::Plain.format(v)),
            TickFormat::Thousands => format!("{}k", (v / 1_000.0).trunc() as i64),
            TickFormat::Millions => format!("{}M", (v / 1_000_000.0).trunc() as i64),
        }
    }
}

/// Where ticks go along the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickSpec {
    /// About `n` "nice" ticks.
    Auto(usize),
    /// Every multiple of the given step.
    Step(f64),
    /// `origin + k * step` for integer `k`.
    StepFrom { origin: f64, step: f64 },
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: TickSpec,
    pub format: TickFormat,
    /// Overrides the theme's label color for both tick and axis labels.
    pub label_color: Option<skia::Color>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            ticks: TickSpec::Auto(6),
            format: TickFormat::Plain,
            label_color: None,
        }
    }

    pub fn default_x() -> Self { Self::new("", 0.0, 10.0) }

    pub fn default_y() -> Self { Self::new("", 0.0, 100.0) }

    pub fn with_ticks(mut self, ticks: TickSpec) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_label_color(mut self, color: skia::Color) -> Self {
        self.label_color = Some(color);
        self
    }

    /// Tick positions inside the current range.
    pub fn tick_values(&self) -> Vec<f64> {
        match self.ticks {
            TickSpec::Auto(n) => nice_ticks(self.min, self.max, n),
            TickSpec::Step(step) => step_ticks(self.min, self.max, step),
            TickSpec::StepFrom { origin, step } => step_ticks_from(self.min, self.max, origin, step),
        }
    }
}
