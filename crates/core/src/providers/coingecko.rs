use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::{MarketDataSource, MarketPayload};
use crate::errors::CoreError;
use crate::models::coin::CoinRecord;
use crate::models::market::MarketSnapshot;
use crate::models::settings::Currency;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// How many coins one refresh pulls from the markets endpoint.
const PAGE_SIZE: u32 = 50;

/// CoinGecko API source for live market data.
///
/// - **Free**: no API key required on the public tier.
/// - **Endpoints**: `/coins/markets` (coin list with 1h/24h/7d changes),
///   `/global` (aggregate market snapshot).
///
/// Both requests are quoted directly in the selected display currency via
/// `vs_currency`, so no client-side conversion is needed.
pub struct CoinGeckoMarketSource {
    client: Client,
}

impl CoinGeckoMarketSource {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }

    async fn fetch_coins(&self, currency: Currency) -> Result<Vec<CoinRecord>, CoreError> {
        let code = currency.api_code();
        let url = format!(
            "{BASE_URL}/coins/markets?vs_currency={code}&order=market_cap_desc\
             &per_page={PAGE_SIZE}&page=1&price_change_percentage=1h%2C24h%2C7d"
        );

        let entries: Vec<MarketEntry> = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Failed to parse coin list: {e}"),
            })?;

        // Entries without a price or rank are delistings mid-update; skip them.
        let coins = entries
            .into_iter()
            .filter_map(|e| {
                let price = e.current_price?;
                let rank = e.market_cap_rank?;
                let last_updated = e
                    .last_updated
                    .as_deref()
                    .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or_else(Utc::now);
                Some(CoinRecord {
                    id: e.id,
                    name: e.name,
                    symbol: e.symbol.to_uppercase(),
                    rank,
                    price,
                    market_cap: e.market_cap.unwrap_or(0.0),
                    volume_24h: e.total_volume.unwrap_or(0.0),
                    change_1h: e.change_1h.unwrap_or(0.0),
                    change_24h: e.change_24h.unwrap_or(0.0),
                    change_7d: e.change_7d.unwrap_or(0.0),
                    last_updated,
                    logo: e.image,
                })
            })
            .collect();

        Ok(coins)
    }

    async fn fetch_snapshot(&self, currency: Currency) -> Result<MarketSnapshot, CoreError> {
        let url = format!("{BASE_URL}/global");

        let resp: GlobalResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("Failed to parse global snapshot: {e}"),
            })?;

        let code = currency.api_code();
        let data = resp.data;
        let total_market_cap =
            data.total_market_cap
                .get(code)
                .copied()
                .ok_or_else(|| CoreError::Api {
                    provider: "CoinGecko".into(),
                    message: format!("No global market cap quoted in {code}"),
                })?;
        let total_24h_volume = data.total_volume.get(code).copied().unwrap_or(0.0);
        let btc_dominance = data.market_cap_percentage.get("btc").copied().unwrap_or(0.0);

        Ok(MarketSnapshot {
            total_market_cap,
            total_24h_volume,
            btc_dominance,
            active_cryptocurrencies: data.active_cryptocurrencies,
        })
    }
}

impl Default for CoinGeckoMarketSource {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct MarketEntry {
    id: String,
    symbol: String,
    name: String,
    image: Option<String>,
    current_price: Option<f64>,
    market_cap: Option<f64>,
    market_cap_rank: Option<u32>,
    total_volume: Option<f64>,
    #[serde(rename = "price_change_percentage_1h_in_currency")]
    change_1h: Option<f64>,
    #[serde(rename = "price_change_percentage_24h_in_currency")]
    change_24h: Option<f64>,
    #[serde(rename = "price_change_percentage_7d_in_currency")]
    change_7d: Option<f64>,
    last_updated: Option<String>,
}

#[derive(Deserialize)]
struct GlobalResponse {
    data: GlobalData,
}

#[derive(Deserialize)]
struct GlobalData {
    total_market_cap: HashMap<String, f64>,
    total_volume: HashMap<String, f64>,
    market_cap_percentage: HashMap<String, f64>,
    active_cryptocurrencies: u32,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataSource for CoinGeckoMarketSource {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn fetch(&self, currency: Currency) -> Result<MarketPayload, CoreError> {
        let coins = self.fetch_coins(currency).await?;
        let snapshot = self.fetch_snapshot(currency).await?;
        Ok(MarketPayload { coins, snapshot })
    }
}
