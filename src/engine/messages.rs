use crate::domain::{Currency, ViewportMode};
use crate::ui::{OpeningEdge, ProfileHits};

/// Everything the page reacts to, translated out of DOM events.
#[derive(Debug)]
pub enum PageEvent {
    /// Desktop pointer-enter on dropdown `index`
    DropdownEnter {
        index: usize,
    },
    /// Opening edge of dropdown `index`, measured after its panel was shown
    DropdownMeasured {
        index: usize,
        edge: OpeningEdge,
    },
    DropdownLeave {
        index: usize,
    },
    /// Mobile click on the anchor of dropdown `index`
    DropdownClick {
        index: usize,
    },
    MenuToggleClick,
    /// Document click while the slide-out menu binding is live
    MenuOutsideClick {
        in_panel: bool,
        in_toggle: bool,
    },
    /// Click on the desktop or mobile logo
    LogoClick(ViewportMode),
    ProfileIconClick(ViewportMode),
    /// Any document click, checked against both profile widgets
    ProfileOutsideClick(ProfileHits),
    CarouselPrev,
    CarouselNext,
    CarouselDot(usize),
    AutoplayTick,
    CurrencySelected(Currency),
    /// Outcome of the start-up exchange-rate lookup
    RateFetched(anyhow::Result<f64>),
}

/// What the caller has to do once the engine processed an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    /// Cancel the DOM event's default action (link navigation)
    pub prevent_default: bool,
    /// Price texts must be rewritten from the currency state
    pub refresh_prices: bool,
    /// The carousel moved because of a user action (not autoplay)
    pub manual_slide: bool,
}
