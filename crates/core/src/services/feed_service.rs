use std::sync::{Arc, RwLock};
use std::time::Duration;

use log::{debug, warn};
use tokio::task::JoinHandle;

use crate::models::coin::CoinRecord;
use crate::models::market::MarketSnapshot;
use crate::models::settings::Currency;
use crate::providers::traits::MarketDataSource;

/// The single user-facing message for any failed refresh. The underlying
/// error goes to the log; the UI only ever sees this string.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch crypto data";

/// How often the feed re-fetches after the initial load.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Everything the views read: the coin list, the aggregate snapshot, and the
/// loading/error flags. Replaced as a unit by the feed task on every cycle.
#[derive(Debug, Clone, Default)]
struct FeedState {
    coins: Vec<CoinRecord>,
    snapshot: Option<MarketSnapshot>,
    /// Snapshot from the refresh before the current one, kept so the summary
    /// cards can show period-over-period deltas.
    previous_snapshot: Option<MarketSnapshot>,
    loading: bool,
    error: Option<&'static str>,
}

/// Owns the coin list and market snapshot, refreshing both on a fixed
/// interval from a pluggable [`MarketDataSource`].
///
/// The spawned refresh task is the sole writer of the shared state; views
/// read cloned snapshots. A failed fetch records [`FETCH_ERROR_MESSAGE`] and
/// leaves prior data untouched; the next tick simply retries, with no
/// backoff. The task is aborted on [`shutdown`](MarketFeed::shutdown) or
/// drop so the timer never fires against torn-down state.
pub struct MarketFeed {
    source: Arc<dyn MarketDataSource>,
    state: Arc<RwLock<FeedState>>,
    refresh_interval: Duration,
    currency: Currency,
    task: Option<JoinHandle<()>>,
}

impl MarketFeed {
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self {
            source,
            state: Arc::new(RwLock::new(FeedState::default())),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            currency: Currency::Usd,
            task: None,
        }
    }

    /// Override the refresh period (tests use millisecond intervals).
    #[must_use]
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Start the refresh cycle: fetch immediately, then re-fetch every
    /// interval until [`shutdown`](Self::shutdown). Restarts the cycle if one
    /// is already running.
    pub fn start(&mut self, currency: Currency) {
        self.stop_task();
        self.currency = currency;

        {
            let mut state = write_lock(&self.state);
            state.loading = true;
            state.error = None;
        }

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let interval = self.refresh_interval;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                // First tick completes immediately, so the initial fetch
                // happens right on activation.
                ticker.tick().await;
                run_cycle(source.as_ref(), &state, currency).await;
            }
        }));
    }

    /// Change the display currency. Restarts the fetch cycle if one is
    /// running so all data is re-quoted immediately.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
        if self.task.is_some() {
            self.start(currency);
        }
    }

    /// Run exactly one fetch-and-replace cycle, outside the timer.
    pub async fn refresh_now(&self) {
        run_cycle(self.source.as_ref(), &self.state, self.currency).await;
    }

    /// Cancel the background refresh task. Idempotent.
    pub fn shutdown(&mut self) {
        self.stop_task();
    }

    /// Whether the background refresh task is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    // ── Read accessors ──────────────────────────────────────────────

    #[must_use]
    pub fn coins(&self) -> Vec<CoinRecord> {
        read_lock(&self.state).coins.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<MarketSnapshot> {
        read_lock(&self.state).snapshot.clone()
    }

    #[must_use]
    pub fn previous_snapshot(&self) -> Option<MarketSnapshot> {
        read_lock(&self.state).previous_snapshot.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        read_lock(&self.state).loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        read_lock(&self.state).error
    }

    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    // ── Internal ────────────────────────────────────────────────────

    fn stop_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for MarketFeed {
    fn drop(&mut self) {
        self.stop_task();
    }
}

/// One fetch-and-replace cycle. On success the coin list and snapshot are
/// replaced atomically and the error is cleared; on failure prior data stays
/// visible and only the error flag changes.
async fn run_cycle(
    source: &dyn MarketDataSource,
    state: &Arc<RwLock<FeedState>>,
    currency: Currency,
) {
    {
        let mut state = write_lock(state);
        state.loading = true;
    }

    match source.fetch(currency).await {
        Ok(payload) => {
            debug!(
                "{}: refreshed {} coins in {currency}",
                source.name(),
                payload.coins.len()
            );
            let mut state = write_lock(state);
            state.previous_snapshot = state.snapshot.take();
            state.coins = payload.coins;
            state.snapshot = Some(payload.snapshot);
            state.error = None;
            state.loading = false;
        }
        Err(e) => {
            warn!("{}: fetch failed: {e}", source.name());
            let mut state = write_lock(state);
            state.error = Some(FETCH_ERROR_MESSAGE);
            state.loading = false;
        }
    }
}

fn read_lock(state: &RwLock<FeedState>) -> std::sync::RwLockReadGuard<'_, FeedState> {
    state.read().unwrap_or_else(|e| e.into_inner())
}

fn write_lock(state: &RwLock<FeedState>) -> std::sync::RwLockWriteGuard<'_, FeedState> {
    state.write().unwrap_or_else(|e| e.into_inner())
}
