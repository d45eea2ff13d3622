use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The currency in which prices and totals are displayed.
///
/// Changing the selection restarts the fetch cycle so every value on screen
/// is re-quoted in the new currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "ETH")]
    Eth,
}

impl Currency {
    /// All selectable currencies, in display order.
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Btc, Currency::Eth];

    /// Three-letter code as the upstream API expects it (lowercase).
    #[must_use]
    pub fn api_code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Btc => "btc",
            Currency::Eth => "eth",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Btc => "BTC",
            Currency::Eth => "ETH",
        };
        write!(f, "{code}")
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "BTC" => Ok(Currency::Btc),
            "ETH" => Ok(Currency::Eth),
            other => Err(CoreError::InvalidCurrency(other.to_string())),
        }
    }
}

/// User-configurable settings, persisted between sessions.
///
/// Dark mode is the only preference the dashboard is required to remember;
/// the display currency rides along as a natural settings field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether the dark color scheme is active
    pub dark_mode: bool,

    /// The currency in which all values are displayed
    #[serde(default)]
    pub currency: Currency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            currency: Currency::Usd,
        }
    }
}
