use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One cryptocurrency's current market statistics.
///
/// This is an immutable snapshot per refresh cycle: the feed replaces the
/// whole coin list atomically on every fetch, never patching individual
/// fields. Field names serialize in camelCase, matching the upstream
/// market-data API JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinRecord {
    /// Stable identity, lowercase slug (e.g., "bitcoin")
    pub id: String,

    /// Human-readable name (e.g., "Bitcoin")
    pub name: String,

    /// Ticker symbol, uppercased (e.g., "BTC")
    pub symbol: String,

    /// Market-cap rank, 1-based
    pub rank: u32,

    /// Current price in the selected display currency
    pub price: f64,

    /// Market capitalization in the selected display currency
    pub market_cap: f64,

    /// Trading volume over the last 24 hours
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,

    /// Percentage change over the last hour (signed)
    #[serde(rename = "change1h")]
    pub change_1h: f64,

    /// Percentage change over the last 24 hours (signed)
    #[serde(rename = "change24h")]
    pub change_24h: f64,

    /// Percentage change over the last 7 days (signed)
    #[serde(rename = "change7d")]
    pub change_7d: f64,

    /// When the upstream source last updated this record
    pub last_updated: DateTime<Utc>,

    /// Optional logo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl CoinRecord {
    /// Approximate circulating supply derived from market cap and price.
    /// Returns `None` when the price is zero or not finite.
    #[must_use]
    pub fn circulating_supply(&self) -> Option<f64> {
        if self.price > 0.0 && self.price.is_finite() && self.market_cap.is_finite() {
            Some(self.market_cap / self.price)
        } else {
            None
        }
    }

    /// Polarity of the 7-day change, used to pick the sparkline palette.
    #[must_use]
    pub fn weekly_trend(&self) -> crate::models::chart::Trend {
        crate::models::chart::Trend::from_change(self.change_7d)
    }
}
