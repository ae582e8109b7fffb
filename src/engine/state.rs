use crate::domain::{CarouselState, CurrencyState};
use crate::ui::{DarkMode, DropdownSet, MobileMenu, ProfilePopovers};

/// All transient UI state of the page, owned in one place.
///
/// Built once from what the page contains at start-up and dropped with it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageState {
    pub dropdowns: DropdownSet,
    pub menu: MobileMenu,
    pub dark_mode: DarkMode,
    pub profile: ProfilePopovers,
    pub carousel: CarouselState,
    pub currency: CurrencyState,
}

impl PageState {
    pub fn new(dropdowns: DropdownSet, slide_count: usize) -> Self {
        Self {
            dropdowns,
            carousel: CarouselState::new(slide_count),
            ..Default::default()
        }
    }
}
