use chrono::{DateTime, Duration, Utc};

use crate::models::chart::{ChartPoint, RenderMode, Sparkline, Trend};
use crate::models::price::PriceSample;

/// Midpoint fallback when every sample has the same price: the line sits
/// flat in the middle of the 0–100 box instead of dividing by a zero range.
const FLAT_LINE_Y: f64 = 50.0;

/// Daily perturbation factors applied to the current price to synthesize a
/// 7-day history, oldest first. Placeholder until a historical-data source
/// is wired into the [`MarketDataSource`] seam.
const HISTORY_FACTORS: [f64; 7] = [0.95, 0.98, 0.92, 1.02, 0.99, 1.01, 1.00];

/// Map an ordered sequence of price samples to normalized line geometry.
///
/// The output spans a 0–100 coordinate box on both axes with the vertical
/// axis inverted, so higher prices appear higher on screen. Fewer than two
/// samples produce [`Sparkline::NoData`] — no arithmetic is attempted.
/// `Detail` mode adds the filled area beneath the line and per-point
/// markers; `Mini` mode carries the bare polyline.
#[must_use]
pub fn render_sparkline(samples: &[PriceSample], trend: Trend, mode: RenderMode) -> Sparkline {
    if samples.len() < 2 {
        return Sparkline::NoData;
    }

    let min = samples.iter().map(|s| s.price).fold(f64::INFINITY, f64::min);
    let max = samples
        .iter()
        .map(|s| s.price)
        .fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let last_index = (samples.len() - 1) as f64;
    let points: Vec<ChartPoint> = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let x = (i as f64 / last_index) * 100.0;
            let y = if range > 0.0 {
                ((max - sample.price) / range) * 100.0
            } else {
                FLAT_LINE_Y
            };
            ChartPoint { x, y }
        })
        .collect();

    let polyline = points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    let (area_path, markers) = match mode {
        RenderMode::Mini => (None, Vec::new()),
        RenderMode::Detail => (
            Some(format!("M 0,100 L {polyline} L 100,100 Z")),
            points.clone(),
        ),
    };

    Sparkline::Line {
        points,
        polyline,
        area_path,
        markers,
        stroke: trend.stroke(),
        fill: trend.fill(),
    }
}

/// Synthesize a deterministic 7-day price history from the current price:
/// one sample per day at fixed perturbation factors, ending at `now` with
/// the unmodified price.
#[must_use]
pub fn synthesize_history(price: f64, now: DateTime<Utc>) -> Vec<PriceSample> {
    HISTORY_FACTORS
        .iter()
        .enumerate()
        .map(|(i, factor)| {
            let days_back = (HISTORY_FACTORS.len() - 1 - i) as i64;
            PriceSample::new(now - Duration::days(days_back), price * factor)
        })
        .collect()
}
