//! Responsive layout and DOM addressing.
//!
//! Every id, selector and flag class the page controls touch lives here, so
//! the markup contract can be read in one place.

/// Breakpoint and resize handling
pub struct LayoutConfig {
    /// Widths at or above this many CSS pixels use the desktop layout
    pub desktop_min_width_px: f64,
    /// Quiet period before a burst of resize events triggers a layout pass.
    /// 0 runs the layout pass on every resize event.
    pub resize_debounce_ms: u32,
}

pub const LAYOUT: LayoutConfig = LayoutConfig {
    desktop_min_width_px: 769.0,
    resize_debounce_ms: 100,
};

/// Element ids and selectors the page exposes
pub struct Selectors {
    pub dropdown: &'static str,
    pub dropdown_anchor: &'static str,
    pub dropdown_content: &'static str,
    pub mobile_menu_toggle_id: &'static str,
    pub nav_menu_id: &'static str,
    pub logo_desktop_id: &'static str,
    pub logo_mobile_id: &'static str,
    pub profile_icon_desktop_id: &'static str,
    pub profile_icon_mobile_id: &'static str,
    pub profile_panel_desktop_id: &'static str,
    pub profile_panel_mobile_id: &'static str,
    pub carousel_slide: &'static str,
    pub carousel_track: &'static str,
    pub carousel_dots: &'static str,
    pub carousel_prev: &'static str,
    pub carousel_next: &'static str,
    pub currency_select_id: &'static str,
    pub price: &'static str,
    /// Attribute holding the immutable INR amount of a price element
    pub price_inr_attr: &'static str,
}

/// Presentation flags (CSS classes) toggled by the controllers
pub struct FlagClasses {
    /// Dropdown content panel is visible
    pub dropdown_open: &'static str,
    /// Dropdown panel opens aligned to its trigger's end edge
    pub dropdown_align_end: &'static str,
    /// Slide-out nav panel is visible
    pub nav_open: &'static str,
    /// Body overlay / no-scroll while the slide-out panel is open
    pub body_menu_open: &'static str,
    pub body_dark: &'static str,
    pub profile_open: &'static str,
    pub dot_active: &'static str,
}

/// The Master Page Configuration
pub struct PageConfig {
    pub selectors: Selectors,
    pub flags: FlagClasses,
}

pub const PAGE: PageConfig = PageConfig {
    selectors: Selectors {
        dropdown: ".dropdown",
        dropdown_anchor: "a",
        dropdown_content: ".dropdown-content",
        mobile_menu_toggle_id: "mobileMenuToggle",
        nav_menu_id: "navMenu",
        logo_desktop_id: "logoToggle",
        logo_mobile_id: "logoMobileToggle",
        profile_icon_desktop_id: "profileIcon",
        profile_icon_mobile_id: "profileIconMobile",
        profile_panel_desktop_id: "profileDropdown",
        profile_panel_mobile_id: "profileDropdownMobile",
        carousel_slide: ".slide",
        carousel_track: ".slides",
        carousel_dots: ".dots",
        carousel_prev: ".prev",
        carousel_next: ".next",
        currency_select_id: "currency",
        price: ".price",
        price_inr_attr: "data-inr",
    },
    flags: FlagClasses {
        dropdown_open: "show-effect",
        dropdown_align_end: "align-end",
        nav_open: "active",
        body_menu_open: "menu-open",
        body_dark: "dark",
        profile_open: "show",
        dot_active: "active",
    },
};
