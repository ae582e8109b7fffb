//! Writes page state back to the DOM as flag classes, text and the carousel
//! offset. Rendering is idempotent: it always writes the full flag set.

use strum::IntoEnumIterator;
use web_sys::Element;

use super::elements::{CarouselElements, Elements};
use crate::config::PAGE;
use crate::domain::{CarouselState, CurrencyState, ViewportMode};
use crate::engine::PageState;
use crate::ui::OpeningEdge;

pub fn sync_flags(elements: &Elements, state: &PageState) {
    let flags = &PAGE.flags;

    for (index, dropdown) in elements.dropdowns.iter().enumerate() {
        let (Some(content), Some(panel)) = (&dropdown.content, state.dropdowns.panel(index)) else {
            continue;
        };
        set_flag(content, flags.dropdown_open, panel.open);
        set_flag(content, flags.dropdown_align_end, panel.edge == OpeningEdge::End);
    }

    if let Some(nav) = &elements.nav_menu {
        set_flag(nav, flags.nav_open, state.menu.is_open());
    }
    set_flag(&elements.body, flags.body_menu_open, state.menu.body_locked());
    set_flag(&elements.body, flags.body_dark, state.dark_mode.is_enabled());

    for variant in ViewportMode::iter() {
        if let Some(panel) = elements.profile_panel(variant) {
            set_flag(panel, flags.profile_open, state.profile.is_open(variant));
        }
    }

    sync_carousel(&elements.carousel, &state.carousel);
}

fn sync_carousel(carousel: &CarouselElements, state: &CarouselState) {
    if state.is_empty() {
        return;
    }
    if let Some(track) = &carousel.track {
        if let Err(e) = track.style().set_property("transform", &state.track_transform()) {
            log::warn!("Could not move carousel track: {e:?}");
        }
    }
    for (index, dot) in carousel.dots.iter().enumerate() {
        set_flag(dot, PAGE.flags.dot_active, state.is_dot_active(index));
    }
}

/// Rewrite every price text in the selected currency.
pub fn sync_prices(elements: &Elements, currency: &CurrencyState) {
    for price in &elements.prices {
        price
            .element
            .set_text_content(Some(&currency.format_price(price.inr)));
    }
}

fn set_flag(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("Could not set .{class} on <{}>: {e:?}", element.tag_name());
    }
}
