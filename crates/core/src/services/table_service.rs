use std::cmp::Ordering;

use crate::format;
use crate::models::coin::CoinRecord;
use crate::models::table::{RowDetail, SortColumn, SortDirection};

/// View-model state for the coin table: search text, sort selection, and the
/// single expanded row.
///
/// `visible_rows` applies the pipeline: filter to rows whose name or symbol
/// contains the search text (case-insensitive), then sort by the selected
/// column. The sort is stable, so re-sorting with the same selection yields
/// an identical order and toggling the direction reverses it exactly.
#[derive(Debug, Clone)]
pub struct TableState {
    search: String,
    sort_column: SortColumn,
    sort_direction: SortDirection,
    expanded: Option<String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_column: SortColumn::Rank,
            sort_direction: SortDirection::Ascending,
            expanded: None,
        }
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Search ──────────────────────────────────────────────────────

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    // ── Sorting ─────────────────────────────────────────────────────

    /// Select a sort column. Reselecting the current column toggles the
    /// direction; a new column resets to ascending.
    pub fn sort_by(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    #[must_use]
    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    #[must_use]
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    // ── Row expansion ───────────────────────────────────────────────

    /// Exactly one row may be expanded at a time: clicking the expanded
    /// row's header collapses it, clicking a different row switches.
    pub fn toggle_expanded(&mut self, coin_id: &str) {
        if self.expanded.as_deref() == Some(coin_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(coin_id.to_string());
        }
    }

    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    #[must_use]
    pub fn is_expanded(&self, coin_id: &str) -> bool {
        self.expanded.as_deref() == Some(coin_id)
    }

    // ── The pipeline ────────────────────────────────────────────────

    /// Filter then sort the coin list for display. An empty search returns
    /// the full list; source order is preserved among equal sort keys.
    #[must_use]
    pub fn visible_rows<'a>(&self, coins: &'a [CoinRecord]) -> Vec<&'a CoinRecord> {
        let needle = self.search.to_lowercase();
        let mut rows: Vec<&CoinRecord> = coins
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.name.to_lowercase().contains(&needle)
                    || c.symbol.to_lowercase().contains(&needle)
            })
            .collect();

        let column = self.sort_column;
        rows.sort_by(|a, b| compare_by(a, b, column));
        if self.sort_direction == SortDirection::Descending {
            rows.reverse();
        }
        rows
    }

    /// Build the pre-formatted detail panel for an expanded row.
    #[must_use]
    pub fn row_detail(&self, coin: &CoinRecord) -> RowDetail {
        let circulating_supply = match coin.circulating_supply() {
            Some(supply) => format!("{} {}", format::group_thousands(supply, 0), coin.symbol),
            None => "—".to_string(),
        };
        RowDetail {
            rank: format!("#{}", coin.rank),
            market_cap: format::format_magnitude(coin.market_cap),
            volume_24h: format::format_magnitude(coin.volume_24h),
            circulating_supply,
        }
    }
}

/// Column comparator: numeric columns compare numerically (NaN compares
/// equal), name and symbol compare as case-sensitive lexicographic strings.
fn compare_by(a: &CoinRecord, b: &CoinRecord, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Rank => a.rank.cmp(&b.rank),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Symbol => a.symbol.cmp(&b.symbol),
        SortColumn::Price => cmp_f64(a.price, b.price),
        SortColumn::MarketCap => cmp_f64(a.market_cap, b.market_cap),
        SortColumn::Volume24h => cmp_f64(a.volume_24h, b.volume_24h),
        SortColumn::Change1h => cmp_f64(a.change_1h, b.change_1h),
        SortColumn::Change24h => cmp_f64(a.change_24h, b.change_24h),
        SortColumn::Change7d => cmp_f64(a.change_7d, b.change_7d),
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
