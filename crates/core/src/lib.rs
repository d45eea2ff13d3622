pub mod errors;
pub mod format;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::sync::Arc;

use models::{
    chart::{RenderMode, Sparkline},
    coin::CoinRecord,
    market::StatCard,
    settings::{Currency, Settings},
    table::{RowDetail, SortColumn},
};
use providers::mock::MockMarketSource;
use providers::traits::MarketDataSource;
use services::{
    chart_service, feed_service::MarketFeed, summary_service, table_service::TableState,
};
use storage::preferences::PreferenceStore;

use errors::CoreError;

/// Everything the UI renders in one frame: loading/error flags, the
/// filtered-and-sorted coin rows, and the four summary cards.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub loading: bool,
    pub error: Option<&'static str>,
    pub rows: Vec<CoinRecord>,
    pub cards: Vec<StatCard>,
}

/// Main entry point for the CryptoTracker core library.
///
/// Wires the polling market feed into the table and summary view models and
/// owns the persisted user settings. The frontend drives it with user
/// interactions and renders from [`view`](Self::view).
#[must_use]
pub struct CryptoTracker {
    settings: Settings,
    store: PreferenceStore,
    feed: MarketFeed,
    table: TableState,
}

impl std::fmt::Debug for CryptoTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoTracker")
            .field("settings", &self.settings)
            .field("running", &self.feed.is_running())
            .field("loading", &self.feed.is_loading())
            .finish()
    }
}

impl CryptoTracker {
    /// Build a tracker over any market data source. Settings are read from
    /// the store once, here; a missing file yields defaults.
    pub fn new(source: Arc<dyn MarketDataSource>, store: PreferenceStore) -> Result<Self, CoreError> {
        let settings = store.load()?;
        let mut feed = MarketFeed::new(source);
        feed.set_currency(settings.currency);
        Ok(Self {
            settings,
            store,
            feed,
            table: TableState::new(),
        })
    }

    /// Build a tracker over the built-in mock dataset.
    pub fn with_mock_data(store: PreferenceStore) -> Result<Self, CoreError> {
        Self::new(Arc::new(MockMarketSource::new()), store)
    }

    // ── Feed lifecycle ──────────────────────────────────────────────

    /// Start the refresh cycle: fetch immediately, then every 30 seconds.
    pub fn start(&mut self) {
        self.feed.start(self.settings.currency);
    }

    /// Cancel the background refresh. Also runs on drop.
    pub fn shutdown(&mut self) {
        self.feed.shutdown();
    }

    /// Run a single fetch-and-replace cycle without the timer.
    pub async fn refresh_now(&self) {
        self.feed.refresh_now().await;
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Change the display currency, persist it, and restart the fetch cycle
    /// so every value is re-quoted.
    pub fn set_currency(&mut self, currency: Currency) -> Result<(), CoreError> {
        self.settings.currency = currency;
        self.store.save(&self.settings)?;
        self.feed.set_currency(currency);
        Ok(())
    }

    #[must_use]
    pub fn currency(&self) -> Currency {
        self.settings.currency
    }

    /// Flip dark mode and persist immediately. Returns the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool, CoreError> {
        self.settings.dark_mode = !self.settings.dark_mode;
        self.store.save(&self.settings)?;
        Ok(self.settings.dark_mode)
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.settings.dark_mode
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Table interactions ──────────────────────────────────────────

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.table.set_search(text);
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        self.table.sort_by(column);
    }

    pub fn toggle_expanded(&mut self, coin_id: &str) {
        self.table.toggle_expanded(coin_id);
    }

    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.table.expanded()
    }

    #[must_use]
    pub fn table(&self) -> &TableState {
        &self.table
    }

    // ── Read surface ────────────────────────────────────────────────

    /// Assemble the full render state: loading/error flags, filtered and
    /// sorted rows, and the four summary cards (empty before the first
    /// successful fetch).
    #[must_use]
    pub fn view(&self) -> DashboardView {
        let coins = self.feed.coins();
        let rows: Vec<CoinRecord> = self
            .table
            .visible_rows(&coins)
            .into_iter()
            .cloned()
            .collect();
        let cards = self
            .feed
            .snapshot()
            .map(|snapshot| {
                summary_service::summary_cards(&snapshot, self.feed.previous_snapshot().as_ref())
            })
            .unwrap_or_default();

        DashboardView {
            loading: self.feed.is_loading(),
            error: self.feed.error(),
            rows,
            cards,
        }
    }

    /// The detail panel for a coin, or `None` if the id is unknown.
    #[must_use]
    pub fn row_detail(&self, coin_id: &str) -> Option<RowDetail> {
        self.feed
            .coins()
            .iter()
            .find(|c| c.id == coin_id)
            .map(|c| self.table.row_detail(c))
    }

    /// Chart geometry for a coin's synthesized 7-day history, or `None` if
    /// the id is unknown. Trend (and palette) follow the 7-day change.
    #[must_use]
    pub fn sparkline(&self, coin_id: &str, mode: RenderMode) -> Option<Sparkline> {
        self.feed.coins().iter().find(|c| c.id == coin_id).map(|c| {
            let history = chart_service::synthesize_history(c.price, chrono::Utc::now());
            chart_service::render_sparkline(&history, c.weekly_trend(), mode)
        })
    }
}
