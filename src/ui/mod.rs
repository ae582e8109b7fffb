// Page controllers: the state each interactive widget owns
pub mod dark_mode;
pub mod dropdowns;
pub mod mobile_menu;
pub mod profile;

// Re-export controller states
pub use dark_mode::DarkMode;
pub use dropdowns::{DropdownPanel, DropdownSet, OpeningEdge};
pub use mobile_menu::MobileMenu;
pub use profile::{ProfileHits, ProfilePopovers};
