use serde::{Deserialize, Serialize};

/// Polarity of a price move. Non-negative changes count as `Up`.
/// Selects which of the two fixed color palettes the sparkline uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    #[must_use]
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// Line color for this trend.
    #[must_use]
    pub fn stroke(&self) -> &'static str {
        match self {
            Trend::Up => "#10B981",
            Trend::Down => "#EF4444",
        }
    }

    /// Area fill color for this trend (detail mode only).
    #[must_use]
    pub fn fill(&self) -> &'static str {
        match self {
            Trend::Up => "rgba(16, 185, 129, 0.1)",
            Trend::Down => "rgba(239, 68, 68, 0.1)",
        }
    }
}

/// How much of the chart to produce: a bare line for table cells, or the
/// line plus area fill and point markers for the expanded detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    Mini,
    Detail,
}

/// One point in the normalized 0–100 chart box. `y` is inverted: higher
/// prices have smaller `y`, so they render higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Geometry for the line chart of one coin's price history.
///
/// The core computes all coordinates — the frontend only renders. Paths use
/// SVG syntax against a `0 0 100 100` view box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Sparkline {
    /// Fewer than two samples: render a "No data" placeholder instead.
    NoData,

    /// A renderable chart.
    Line {
        /// Normalized points, one per sample, in input order
        points: Vec<ChartPoint>,

        /// Polyline attribute string: `"x,y x,y ..."` with 2-decimal coordinates
        polyline: String,

        /// Closed area path under the line (`Detail` mode only)
        area_path: Option<String>,

        /// Per-point marker positions (`Detail` mode only)
        markers: Vec<ChartPoint>,

        /// Line color, keyed by trend
        stroke: &'static str,

        /// Area fill color, keyed by trend
        fill: &'static str,
    },
}

impl Sparkline {
    /// Returns `true` when there was not enough data to draw a line.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Sparkline::NoData)
    }
}
