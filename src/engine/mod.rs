pub mod bindings;
pub mod core;
pub mod messages;
pub mod state;

// Re-export key components
pub use bindings::{Binder, BindingKey, BindingRegistry, bindings_for};
pub use core::PageEngine;
pub use messages::{PageEvent, Reaction};
pub use state::PageState;
