//! The remote exchange-rate service.
//!
//! Same request from both targets: `reqwest` natively, the browser's `fetch`
//! on wasm. The body is handed to `parse_rate_payload` either way.

use anyhow::Result;
use async_trait::async_trait;

#[cfg(target_arch = "wasm32")]
use anyhow::{anyhow, bail};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

use crate::config::CURRENCY;
use crate::data::rate_service::{RateSource, parse_rate_payload};

pub struct ExchangeRateHost {
    url: String,
    symbol: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ExchangeRateHost {
    pub fn new(url: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            symbol: symbol.into(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    /// Endpoint and symbol from `CURRENCY`.
    pub fn from_config() -> Self {
        Self::new(CURRENCY.rate_url, CURRENCY.rate_symbol)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn fetch_body(&self) -> Result<String> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }

    #[cfg(target_arch = "wasm32")]
    async fn fetch_body(&self) -> Result<String> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
        let response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(js_error)?
            .dyn_into::<web_sys::Response>()
            .map_err(js_error)?;
        if !response.ok() {
            bail!("HTTP {} from {}", response.status(), self.url);
        }
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        text.as_string()
            .ok_or_else(|| anyhow!("response body from {} is not text", self.url))
    }
}

// JsValue is neither Send nor Sync, so keep only its description
#[cfg(target_arch = "wasm32")]
fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}

#[async_trait(?Send)]
impl RateSource for ExchangeRateHost {
    async fn fetch_rate(&self) -> Result<f64> {
        let body = self.fetch_body().await?;
        parse_rate_payload(&body, &self.symbol)
    }

    fn signature(&self) -> &'static str {
        "exchangerate.host"
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use httpmock::prelude::*;

    use super::*;

    #[tokio::test]
    async fn reads_the_rate_from_the_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/latest")
                    .query_param("base", "INR")
                    .query_param("symbols", "USD");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"base":"INR","rates":{"USD":0.0119}}"#);
            })
            .await;

        let source = ExchangeRateHost::new(server.url("/latest?base=INR&symbols=USD"), "USD");
        assert_eq!(source.fetch_rate().await.unwrap(), 0.0119);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn http_errors_are_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/latest");
                then.status(503);
            })
            .await;

        let source = ExchangeRateHost::new(server.url("/latest"), "USD");
        assert!(source.fetch_rate().await.is_err());
    }

    #[tokio::test]
    async fn payload_without_the_symbol_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/latest");
                then.status(200).body(r#"{"rates":{"EUR":0.011}}"#);
            })
            .await;

        let source = ExchangeRateHost::new(server.url("/latest"), "USD");
        let err = source.fetch_rate().await.unwrap_err();
        assert!(err.to_string().contains("USD"));
    }
}
