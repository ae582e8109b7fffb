
// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = storefront_ui::web::init_logging(level);

    log::info!("Storefront page controls starting...");

    // B. Wire the page
    storefront_ui::web::mount_when_ready()?;
    Ok(())
}

/// Remove every listener and stop autoplay (e.g. before a client-side page swap).
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn teardown() {
    storefront_ui::web::unmount();
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use storefront_ui::config::CURRENCY;
    use storefront_ui::{Cli, Currency, CurrencyState, rate_sources, resolve_rate};
    use tokio::runtime::Runtime;

    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Resolve the rate (live service first unless offline)
    let rt = Runtime::new()?;
    let (rate, signature) = rt.block_on(resolve_rate(&rate_sources(args.offline), &CURRENCY.client))?;
    log::info!("Using INR -> USD rate {rate} from {signature}");

    // D. Print prices exactly as the page would
    let mut state = CurrencyState::default();
    state.set_rate(rate);
    state.set_display(Currency::from_selector_value(&args.currency));
    for inr in args.amounts {
        println!("{}", state.format_price(inr));
    }
    Ok(())
}
