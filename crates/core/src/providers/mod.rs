pub mod traits;

// Data source implementations
pub mod coingecko;
pub mod mock;
