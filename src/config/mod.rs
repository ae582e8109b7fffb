//! Configuration module for the storefront page controls.

pub mod carousel;
pub mod currency;
pub mod layout;

mod debug; // Private: use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use carousel::{AutoplayPolicy, CAROUSEL};
pub use currency::{CURRENCY, RateClientConfig};
pub use layout::{LAYOUT, PAGE};
