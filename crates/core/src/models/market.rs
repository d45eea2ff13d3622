use serde::{Deserialize, Serialize};

use super::chart::Trend;

/// Aggregate totals across all tracked coins.
///
/// One instance per refresh cycle, replaced wholesale. Absent until the
/// first fetch resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    /// Total market capitalization across all tracked coins
    pub total_market_cap: f64,

    /// Total trading volume over the last 24 hours
    #[serde(rename = "total24hVolume")]
    pub total_24h_volume: f64,

    /// Bitcoin's share of the total market cap, in percent
    pub btc_dominance: f64,

    /// Number of actively tracked cryptocurrencies
    pub active_cryptocurrencies: u32,
}

/// One pre-formatted market summary card.
///
/// The core computes the strings — the frontend just renders four of these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    /// Card title (e.g., "Total Market Cap")
    pub title: &'static str,

    /// Formatted headline value
    pub value: String,

    /// Formatted change since the previous refresh, absent on first load
    pub change: Option<String>,

    /// Polarity of the change, used for color classification
    pub trend: Trend,
}
