use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::coin::CoinRecord;
use crate::models::market::MarketSnapshot;
use crate::models::settings::Currency;

/// Everything one refresh cycle delivers: the full coin list plus the
/// aggregate market snapshot. The feed replaces its state with this payload
/// wholesale — there are no partial or incremental updates.
#[derive(Debug, Clone)]
pub struct MarketPayload {
    pub coins: Vec<CoinRecord>,
    pub snapshot: MarketSnapshot,
}

/// Trait abstraction for market data sources.
///
/// This is the seam where a real market-data API is substituted for the
/// built-in mock dataset. If an API stops working or changes, we replace
/// only that one implementation — the rest of the codebase is untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the current coin list and market snapshot, quoted in `currency`.
    async fn fetch(&self, currency: Currency) -> Result<MarketPayload, CoreError>;
}
