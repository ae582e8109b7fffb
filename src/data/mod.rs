// Exchange-rate lookup for the currency display
pub mod live_rate;
pub mod rate_service;

// Re-export commonly used types
pub use live_rate::ExchangeRateHost;
pub use rate_service::{FallbackRate, RateSource, fetch_with_retry, parse_rate_payload, resolve_rate};
