use std::collections::HashMap;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use serde::Deserialize;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::RateClientConfig;
use crate::utils::app_time::{now, sleep_ms, with_timeout};

/// Anything that can produce an INR -> USD multiplier.
///
/// `?Send` because the browser implementation awaits JS promises.
#[async_trait(?Send)]
pub trait RateSource {
    /// Either produce a rate OR return an anyhow::Error
    async fn fetch_rate(&self) -> Result<f64>;

    /// A unique identifier for this implementation (so afterwards we know which one answered).
    fn signature(&self) -> &'static str;
}

/// Fixed rate, used as the last link of a source chain.
#[derive(Debug, Clone, Copy)]
pub struct FallbackRate(pub f64);

#[async_trait(?Send)]
impl RateSource for FallbackRate {
    async fn fetch_rate(&self) -> Result<f64> {
        Ok(self.0)
    }

    fn signature(&self) -> &'static str {
        "Fallback constant"
    }
}

#[derive(Debug, Deserialize)]
struct LatestRates {
    rates: HashMap<String, f64>,
}

/// Pull `rates.<symbol>` out of a rate-service response body.
pub fn parse_rate_payload(body: &str, symbol: &str) -> Result<f64> {
    let payload: LatestRates =
        serde_json::from_str(body).context("malformed exchange-rate payload")?;
    let rate = payload
        .rates
        .get(symbol)
        .copied()
        .ok_or_else(|| anyhow!("payload has no rate for {symbol}"))?;
    if !rate.is_finite() || rate <= 0.0 {
        bail!("rate for {symbol} is not a positive number: {rate}");
    }
    Ok(rate)
}

/// Ask `source` up to `retries + 1` times. Each attempt is bounded by
/// `timeout_ms`; retry `n` waits `n * backoff_ms` first.
pub async fn fetch_with_retry(source: &dyn RateSource, client: &RateClientConfig) -> Result<f64> {
    let attempts = client.retries + 1;
    let mut last_error = anyhow!("no attempt made");

    for attempt in 0..attempts {
        if attempt > 0 {
            sleep_ms(client.backoff_ms * u64::from(attempt)).await;
        }

        let started = now();
        let outcome = with_timeout(client.timeout_ms, source.fetch_rate())
            .await
            .unwrap_or_else(|| Err(anyhow!("timed out after {} ms", client.timeout_ms)));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_rate_fetch {
            log::info!(
                "[rate] {} attempt {}/{} finished in {:?}: {}",
                source.signature(),
                attempt + 1,
                attempts,
                started.elapsed(),
                if outcome.is_ok() { "ok" } else { "failed" }
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = started;

        match outcome {
            Ok(rate) => return Ok(rate),
            Err(e) => last_error = e,
        }
    }

    Err(last_error.context(format!(
        "{} failed after {attempts} attempt(s)",
        source.signature()
    )))
}

/// Try each source in order and return the first rate plus who supplied it.
pub async fn resolve_rate(
    sources: &[Box<dyn RateSource>],
    client: &RateClientConfig,
) -> Result<(f64, &'static str)> {
    for source in sources {
        match fetch_with_retry(source.as_ref(), client).await {
            Ok(rate) => return Ok((rate, source.signature())),
            Err(e) => {
                log::info!("Error with a rate source: {e:#}");
                // Continue to the next source
            }
        }
    }
    Err(anyhow!("All rate sources failed to produce a rate"))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    const FAST: RateClientConfig = RateClientConfig {
        timeout_ms: 50,
        retries: 2,
        backoff_ms: 1,
    };

    /// Fails a fixed number of times, then answers.
    struct FlakySource {
        failures_left: Cell<u32>,
        calls: Cell<u32>,
        rate: f64,
    }

    impl FlakySource {
        fn new(failures: u32, rate: f64) -> Self {
            Self {
                failures_left: Cell::new(failures),
                calls: Cell::new(0),
                rate,
            }
        }
    }

    #[async_trait(?Send)]
    impl RateSource for FlakySource {
        async fn fetch_rate(&self) -> Result<f64> {
            self.calls.set(self.calls.get() + 1);
            if self.failures_left.get() > 0 {
                self.failures_left.set(self.failures_left.get() - 1);
                bail!("connection reset");
            }
            Ok(self.rate)
        }

        fn signature(&self) -> &'static str {
            "Flaky"
        }
    }

    /// Never answers within any sane timeout.
    struct StalledSource;

    #[async_trait(?Send)]
    impl RateSource for StalledSource {
        async fn fetch_rate(&self) -> Result<f64> {
            sleep_ms(10_000).await;
            Ok(1.0)
        }

        fn signature(&self) -> &'static str {
            "Stalled"
        }
    }

    #[test]
    fn payload_rate_is_extracted() {
        let body = r#"{"success":true,"base":"INR","rates":{"USD":0.01201}}"#;
        assert_eq!(parse_rate_payload(body, "USD").unwrap(), 0.01201);
    }

    #[test]
    fn malformed_payloads_are_errors() {
        assert!(parse_rate_payload("<html>busy</html>", "USD").is_err());
        assert!(parse_rate_payload(r#"{"rates":{}}"#, "USD").is_err());
        assert!(parse_rate_payload(r#"{"rates":{"USD":0}}"#, "USD").is_err());
        assert!(parse_rate_payload(r#"{"rates":{"USD":-2.5}}"#, "USD").is_err());
        assert!(parse_rate_payload(r#"{"error":"quota"}"#, "USD").is_err());
    }

    #[tokio::test]
    async fn retries_until_the_source_answers() {
        let source = FlakySource::new(2, 0.0119);
        assert_eq!(fetch_with_retry(&source, &FAST).await.unwrap(), 0.0119);
        assert_eq!(source.calls.get(), 3);
    }

    #[tokio::test]
    async fn gives_up_after_the_retry_budget() {
        let source = FlakySource::new(5, 0.0119);
        let err = fetch_with_retry(&source, &FAST).await.unwrap_err();
        assert_eq!(source.calls.get(), 3);
        assert!(format!("{err:#}").contains("connection reset"));
    }

    #[tokio::test]
    async fn stalled_source_times_out() {
        let client = RateClientConfig {
            retries: 0,
            ..FAST
        };
        let err = fetch_with_retry(&StalledSource, &client).await.unwrap_err();
        assert!(format!("{err:#}").contains("timed out"));
    }

    #[tokio::test]
    async fn chain_falls_back_to_the_constant() {
        let sources: Vec<Box<dyn RateSource>> =
            vec![Box::new(FlakySource::new(10, 0.5)), Box::new(FallbackRate(0.01164))];
        let (rate, signature) = resolve_rate(&sources, &FAST).await.unwrap();
        assert_eq!(rate, 0.01164);
        assert_eq!(signature, "Fallback constant");
    }

    #[tokio::test]
    async fn chain_prefers_the_first_working_source() {
        let sources: Vec<Box<dyn RateSource>> =
            vec![Box::new(FlakySource::new(1, 0.0125)), Box::new(FallbackRate(0.01164))];
        let (rate, signature) = resolve_rate(&sources, &FAST).await.unwrap();
        assert_eq!(rate, 0.0125);
        assert_eq!(signature, "Flaky");
    }

    #[tokio::test]
    async fn empty_chain_is_an_error() {
        assert!(resolve_rate(&[], &FAST).await.is_err());
    }
}
