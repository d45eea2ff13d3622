use serde::{Deserialize, Serialize};

/// Sortable table columns.
///
/// Numeric columns compare numerically; `Name` and `Symbol` compare as
/// case-sensitive lexicographic strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    Rank,
    Name,
    Symbol,
    Price,
    MarketCap,
    Volume24h,
    Change1h,
    Change24h,
    Change7d,
}

impl SortColumn {
    /// Whether this column holds numeric values.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, SortColumn::Name | SortColumn::Symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The pre-formatted detail panel shown under an expanded table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowDetail {
    /// Market-cap rank, formatted as `"#<rank>"`
    pub rank: String,

    /// Formatted market capitalization
    pub market_cap: String,

    /// Formatted 24h trading volume
    pub volume_24h: String,

    /// Circulating supply with the ticker symbol (e.g., `"19,759,850 BTC"`),
    /// or `"—"` when the price is zero
    pub circulating_supply: String,
}
