// ═══════════════════════════════════════════════════════════════════
// Chart Tests — sparkline geometry, placeholder states, history synth
// ═══════════════════════════════════════════════════════════════════

use chrono::{Duration, TimeZone, Utc};
use cryptotracker_core::models::chart::{ChartPoint, RenderMode, Sparkline, Trend};
use cryptotracker_core::models::price::PriceSample;
use cryptotracker_core::services::chart_service::{render_sparkline, synthesize_history};

fn samples(prices: &[f64]) -> Vec<PriceSample> {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PriceSample::new(start + Duration::days(i as i64), p))
        .collect()
}

fn line_parts(
    sparkline: &Sparkline,
) -> (&[ChartPoint], &str, Option<&str>, &[ChartPoint], &str, &str) {
    match sparkline {
        Sparkline::Line {
            points,
            polyline,
            area_path,
            markers,
            stroke,
            fill,
        } => (
            points.as_slice(),
            polyline.as_str(),
            area_path.as_deref(),
            markers.as_slice(),
            *stroke,
            *fill,
        ),
        Sparkline::NoData => panic!("expected a renderable line"),
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Placeholder states
// ═══════════════════════════════════════════════════════════════════

mod no_data {
    use super::*;

    #[test]
    fn empty_input_is_no_data() {
        let sparkline = render_sparkline(&[], Trend::Up, RenderMode::Mini);
        assert!(sparkline.is_no_data());
    }

    #[test]
    fn single_sample_is_no_data() {
        let sparkline = render_sparkline(&samples(&[42.0]), Trend::Up, RenderMode::Detail);
        assert!(sparkline.is_no_data());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Geometry
// ═══════════════════════════════════════════════════════════════════

mod geometry {
    use super::*;

    #[test]
    fn x_spreads_evenly_across_the_box() {
        let sparkline = render_sparkline(&samples(&[1.0, 2.0, 3.0]), Trend::Up, RenderMode::Mini);
        let (points, ..) = line_parts(&sparkline);
        assert_eq!(points.len(), 3);
        assert!((points[0].x - 0.0).abs() < 1e-9);
        assert!((points[1].x - 50.0).abs() < 1e-9);
        assert!((points[2].x - 100.0).abs() < 1e-9);
    }

    #[test]
    fn y_axis_is_inverted() {
        // Rising prices: the maximum (last sample) must sit at the top (y = 0)
        let sparkline = render_sparkline(&samples(&[1.0, 2.0, 3.0]), Trend::Up, RenderMode::Mini);
        let (points, ..) = line_parts(&sparkline);
        assert!((points[0].y - 100.0).abs() < 1e-9); // min price, bottom
        assert!((points[1].y - 50.0).abs() < 1e-9);
        assert!((points[2].y - 0.0).abs() < 1e-9); // max price, top
    }

    #[test]
    fn zero_price_range_draws_flat_midline() {
        let sparkline = render_sparkline(&samples(&[5.0, 5.0]), Trend::Up, RenderMode::Mini);
        let (points, polyline, ..) = line_parts(&sparkline);
        assert!(points.iter().all(|p| (p.y - 50.0).abs() < 1e-9));
        assert_eq!(polyline, "0.00,50.00 100.00,50.00");
    }

    #[test]
    fn all_coordinates_stay_in_the_box() {
        let sparkline = render_sparkline(
            &samples(&[64166.0, 66192.3, 62139.8, 68894.1, 66867.7, 68218.6, 67543.21]),
            Trend::Down,
            RenderMode::Detail,
        );
        let (points, ..) = line_parts(&sparkline);
        for p in points {
            assert!((0.0..=100.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
        }
    }

    #[test]
    fn polyline_uses_two_decimal_pairs() {
        let sparkline = render_sparkline(&samples(&[1.0, 3.0, 2.0]), Trend::Up, RenderMode::Mini);
        let (_, polyline, ..) = line_parts(&sparkline);
        assert_eq!(polyline, "0.00,100.00 50.00,0.00 100.00,50.00");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Render modes and palettes
// ═══════════════════════════════════════════════════════════════════

mod modes {
    use super::*;

    #[test]
    fn mini_mode_has_no_area_or_markers() {
        let sparkline = render_sparkline(&samples(&[1.0, 2.0]), Trend::Up, RenderMode::Mini);
        let (_, _, area, markers, ..) = line_parts(&sparkline);
        assert!(area.is_none());
        assert!(markers.is_empty());
    }

    #[test]
    fn detail_mode_closes_the_area_path() {
        let sparkline = render_sparkline(&samples(&[1.0, 2.0]), Trend::Up, RenderMode::Detail);
        let (points, polyline, area, markers, ..) = line_parts(&sparkline);
        let area = area.expect("detail mode must fill the area");
        assert_eq!(area, format!("M 0,100 L {polyline} L 100,100 Z"));
        assert_eq!(markers, points);
    }

    #[test]
    fn palette_follows_trend() {
        let up = render_sparkline(&samples(&[1.0, 2.0]), Trend::Up, RenderMode::Mini);
        let (.., stroke, fill) = line_parts(&up);
        assert_eq!(stroke, "#10B981");
        assert_eq!(fill, "rgba(16, 185, 129, 0.1)");

        let down = render_sparkline(&samples(&[2.0, 1.0]), Trend::Down, RenderMode::Mini);
        let (.., stroke, fill) = line_parts(&down);
        assert_eq!(stroke, "#EF4444");
        assert_eq!(fill, "rgba(239, 68, 68, 0.1)");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Synthesized history
// ═══════════════════════════════════════════════════════════════════

mod history {
    use super::*;

    #[test]
    fn seven_daily_samples_ending_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 7, 12, 0, 0).unwrap();
        let history = synthesize_history(100.0, now);
        assert_eq!(history.len(), 7);
        assert_eq!(history.last().unwrap().timestamp, now);
        assert_eq!(history.first().unwrap().timestamp, now - Duration::days(6));
        for pair in history.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::days(1));
        }
    }

    #[test]
    fn applies_fixed_perturbation_factors() {
        let now = Utc.with_ymd_and_hms(2024, 6, 7, 12, 0, 0).unwrap();
        let history = synthesize_history(100.0, now);
        let prices: Vec<f64> = history.iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![95.0, 98.0, 92.0, 102.0, 99.0, 101.0, 100.0]);
    }

    #[test]
    fn is_deterministic() {
        let now = Utc.with_ymd_and_hms(2024, 6, 7, 12, 0, 0).unwrap();
        assert_eq!(synthesize_history(67543.21, now), synthesize_history(67543.21, now));
    }

    #[test]
    fn synthesized_history_renders() {
        let now = Utc.with_ymd_and_hms(2024, 6, 7, 12, 0, 0).unwrap();
        let history = synthesize_history(67543.21, now);
        let sparkline = render_sparkline(&history, Trend::Down, RenderMode::Detail);
        assert!(!sparkline.is_no_data());
    }
}
