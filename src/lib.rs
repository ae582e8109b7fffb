#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

// Browser bindings
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export commonly used types
pub use data::{ExchangeRateHost, FallbackRate, RateSource, resolve_rate};
pub use domain::{CarouselState, Currency, CurrencyState, ViewportMode, classify};
pub use engine::{PageEngine, PageEvent, PageState, Reaction};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Resolve the INR -> USD rate and print prices the way the page shows them", long_about = None)]
pub struct Cli {
    /// INR amounts to display
    #[arg(required = true)]
    pub amounts: Vec<f64>,

    /// Display currency (USD or INR)
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// Skip the live rate service and use the fallback constant
    #[arg(long, default_value_t = false)]
    pub offline: bool,
}

/// Rate sources in the order they are tried.
pub fn rate_sources(offline: bool) -> Vec<Box<dyn RateSource>> {
    let mut sources: Vec<Box<dyn RateSource>> = Vec::new();
    if !offline {
        sources.push(Box::new(ExchangeRateHost::from_config()));
    }
    sources.push(Box::new(FallbackRate(config::CURRENCY.fallback_inr_to_usd)));
    sources
}
