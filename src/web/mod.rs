//! Browser side: binds the page engine to the DOM (wasm32 only).

pub mod binder;
pub mod elements;
pub mod render;
pub mod runtime;

use std::fmt;

use wasm_bindgen::JsValue;

pub use elements::Elements;
pub use runtime::{mount_when_ready, unmount};

/// Reasons the page controls cannot start at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Not running inside a browser window
    NoWindow,
    NoDocument,
    NoBody,
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::NoWindow => write!(f, "no global `window` exists"),
            PageError::NoDocument => write!(f, "window has no document"),
            PageError::NoBody => write!(f, "document has no body"),
        }
    }
}

impl std::error::Error for PageError {}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Route `log` records to the browser console.
pub fn init_logging(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(fern::Output::call(|record| {
            let line = JsValue::from_str(&record.args().to_string());
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&line),
                log::Level::Warn => web_sys::console::warn_1(&line),
                _ => web_sys::console::log_1(&line),
            }
        }))
        .apply()
}
