use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use super::traits::{MarketDataSource, MarketPayload};
use crate::errors::CoreError;
use crate::models::coin::CoinRecord;
use crate::models::market::MarketSnapshot;
use crate::models::settings::Currency;

/// In-memory market data source standing in for a live market-data API.
///
/// Returns the same fixed dataset on every fetch, regardless of the selected
/// currency (the placeholder data is quoted in USD). A failure switch lets
/// tests exercise the fetch-failed path and the recovery on the next tick.
pub struct MockMarketSource {
    failing: AtomicBool,
}

impl MockMarketSource {
    pub fn new() -> Self {
        Self {
            failing: AtomicBool::new(false),
        }
    }

    /// A source whose every fetch fails, for exercising the error path.
    pub fn failing() -> Self {
        Self {
            failing: AtomicBool::new(true),
        }
    }

    /// Flip the failure switch at runtime (e.g., fail once, then recover).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn coins() -> Vec<CoinRecord> {
        let now = Utc::now();
        vec![
            CoinRecord {
                id: "bitcoin".into(),
                name: "Bitcoin".into(),
                symbol: "BTC".into(),
                rank: 1,
                price: 67543.21,
                market_cap: 1_334_567_890_123.0,
                volume_24h: 28_456_789_012.0,
                change_1h: 0.23,
                change_24h: 2.45,
                change_7d: -3.21,
                last_updated: now,
                logo: Some("https://cryptologos.cc/logos/bitcoin-btc-logo.png".into()),
            },
            CoinRecord {
                id: "ethereum".into(),
                name: "Ethereum".into(),
                symbol: "ETH".into(),
                rank: 2,
                price: 3842.67,
                market_cap: 462_345_678_901.0,
                volume_24h: 15_234_567_890.0,
                change_1h: -0.12,
                change_24h: 4.67,
                change_7d: 8.92,
                last_updated: now,
                logo: Some("https://cryptologos.cc/logos/ethereum-eth-logo.png".into()),
            },
            CoinRecord {
                id: "tether".into(),
                name: "Tether".into(),
                symbol: "USDT".into(),
                rank: 3,
                price: 1.0001,
                market_cap: 118_234_567_890.0,
                volume_24h: 45_678_901_234.0,
                change_1h: 0.01,
                change_24h: 0.02,
                change_7d: -0.01,
                last_updated: now,
                logo: Some("https://cryptologos.cc/logos/tether-usdt-logo.png".into()),
            },
            CoinRecord {
                id: "bnb".into(),
                name: "BNB".into(),
                symbol: "BNB".into(),
                rank: 4,
                price: 634.89,
                market_cap: 92_345_678_901.0,
                volume_24h: 1_876_543_210.0,
                change_1h: 1.23,
                change_24h: -2.34,
                change_7d: 12.45,
                last_updated: now,
                logo: Some("https://cryptologos.cc/logos/bnb-bnb-logo.png".into()),
            },
            CoinRecord {
                id: "solana".into(),
                name: "Solana".into(),
                symbol: "SOL".into(),
                rank: 5,
                price: 198.76,
                market_cap: 93_456_789_012.0,
                volume_24h: 3_456_789_012.0,
                change_1h: -0.87,
                change_24h: 6.21,
                change_7d: 18.93,
                last_updated: now,
                logo: Some("https://cryptologos.cc/logos/solana-sol-logo.png".into()),
            },
        ]
    }

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot {
            total_market_cap: 2_456_789_012_345.0,
            total_24h_volume: 87_654_321_098.0,
            btc_dominance: 54.32,
            active_cryptocurrencies: 2847,
        }
    }
}

impl Default for MockMarketSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataSource for MockMarketSource {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn fetch(&self, _currency: Currency) -> Result<MarketPayload, CoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CoreError::Api {
                provider: "Mock".into(),
                message: "simulated fetch failure".into(),
            });
        }
        Ok(MarketPayload {
            coins: Self::coins(),
            snapshot: Self::snapshot(),
        })
    }
}
