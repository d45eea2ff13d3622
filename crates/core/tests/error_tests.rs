// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError display and conversions
// ═══════════════════════════════════════════════════════════════════

use cryptotracker_core::errors::CoreError;

#[test]
fn api_error_names_the_provider() {
    let err = CoreError::Api {
        provider: "CoinGecko".into(),
        message: "rate limited".into(),
    };
    assert_eq!(err.to_string(), "API error (CoinGecko): rate limited");
}

#[test]
fn network_error_display() {
    let err = CoreError::Network("connection refused".into());
    assert_eq!(err.to_string(), "Network error: connection refused");
}

#[test]
fn invalid_currency_display() {
    let err = CoreError::InvalidCurrency("PLN".into());
    assert_eq!(err.to_string(), "Unknown currency code: PLN");
}

#[test]
fn io_error_converts_to_file_io() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: CoreError = io.into();
    assert!(matches!(err, CoreError::FileIO(_)));
    assert!(err.to_string().contains("denied"));
}

#[test]
fn serde_error_converts_to_deserialization() {
    let serde_err = serde_json::from_str::<u32>("not a number").unwrap_err();
    let err: CoreError = serde_err.into();
    assert!(matches!(err, CoreError::Deserialization(_)));
}
