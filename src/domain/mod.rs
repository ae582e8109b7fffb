// Domain types and value objects
pub mod carousel;
pub mod currency;
pub mod viewport;

// Re-export commonly used types
pub use carousel::{AutoplayGate, CarouselState};
pub use currency::{Currency, CurrencyState};
pub use viewport::{ViewportMode, classify};
