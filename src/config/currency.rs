//! Currency display and exchange-rate service configuration.

/// Configuration for the exchange-rate HTTP client
/// (This is the runtime struct used by the rate sources)
#[derive(Debug, Clone, Copy)]
pub struct RateClientConfig {
    /// Per-attempt timeout
    pub timeout_ms: u64,
    /// Extra attempts after the first failure
    pub retries: u32,
    /// Delay before retry `n` is `n * backoff_ms`
    pub backoff_ms: u64,
}

impl Default for RateClientConfig {
    fn default() -> Self {
        CURRENCY.client
    }
}

/// The Master Currency Configuration
pub struct CurrencyConfig {
    /// INR -> USD multiplier used until (and unless) a live rate arrives
    pub fallback_inr_to_usd: f64,
    /// Endpoint answering `{"rates": {"USD": <number>}}`
    pub rate_url: &'static str,
    /// Key looked up in the `rates` object of the payload
    pub rate_symbol: &'static str,
    pub client: RateClientConfig,
    /// Decimal places shown for converted (USD) prices
    pub usd_decimals: usize,
}

pub const CURRENCY: CurrencyConfig = CurrencyConfig {
    fallback_inr_to_usd: 0.01164,
    rate_url: "https://api.exchangerate.host/latest?base=INR&symbols=USD",
    rate_symbol: "USD",
    client: RateClientConfig {
        timeout_ms: 5000,
        retries: 2,
        backoff_ms: 1000,
    },
    usd_decimals: 2,
};
