use crate::format;
use crate::models::chart::Trend;
use crate::models::market::{MarketSnapshot, StatCard};

/// Build the four fixed market summary cards from the current snapshot.
///
/// Deltas are computed against the snapshot from the previous refresh:
/// percent change for the cap/volume cards, percentage-point difference for
/// dominance, and a signed count for active currencies. On the first load
/// there is no previous snapshot and the deltas are absent.
#[must_use]
pub fn summary_cards(
    snapshot: &MarketSnapshot,
    previous: Option<&MarketSnapshot>,
) -> Vec<StatCard> {
    let cap_delta = previous
        .and_then(|p| percent_change(p.total_market_cap, snapshot.total_market_cap));
    let volume_delta = previous
        .and_then(|p| percent_change(p.total_24h_volume, snapshot.total_24h_volume));
    let dominance_delta = previous.map(|p| snapshot.btc_dominance - p.btc_dominance);
    let active_delta = previous.map(|p| {
        i64::from(snapshot.active_cryptocurrencies) - i64::from(p.active_cryptocurrencies)
    });

    vec![
        StatCard {
            title: "Total Market Cap",
            value: format::format_magnitude(snapshot.total_market_cap),
            change: cap_delta.map(format::format_change),
            trend: Trend::from_change(cap_delta.unwrap_or(0.0)),
        },
        StatCard {
            title: "24h Volume",
            value: format::format_magnitude(snapshot.total_24h_volume),
            change: volume_delta.map(format::format_change),
            trend: Trend::from_change(volume_delta.unwrap_or(0.0)),
        },
        StatCard {
            title: "BTC Dominance",
            value: format::format_percentage(snapshot.btc_dominance),
            change: dominance_delta.map(format::format_change),
            trend: Trend::from_change(dominance_delta.unwrap_or(0.0)),
        },
        StatCard {
            title: "Active Cryptos",
            value: format::format_count(snapshot.active_cryptocurrencies),
            change: active_delta.map(|d| format!("{d:+}")),
            trend: Trend::from_change(active_delta.unwrap_or(0) as f64),
        },
    ]
}

/// Percent change from `previous` to `current`. `None` when the previous
/// value can't anchor a ratio (zero or non-finite).
fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}
