use crate::domain::ViewportMode;

/// Where a document click landed relative to the two profile widgets.
/// `true` means inside the variant's icon or its panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProfileHits {
    pub desktop: bool,
    pub mobile: bool,
}

/// Open state of the desktop and mobile profile popovers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProfilePopovers {
    desktop_open: bool,
    mobile_open: bool,
}

impl ProfilePopovers {
    pub fn is_open(&self, variant: ViewportMode) -> bool {
        match variant {
            ViewportMode::Desktop => self.desktop_open,
            ViewportMode::Mobile => self.mobile_open,
        }
    }

    /// Icon click. Only the mobile icon is script-driven; the desktop panel
    /// opens through `:hover` styling.
    pub fn toggle(&mut self, variant: ViewportMode) {
        match variant {
            ViewportMode::Desktop => self.desktop_open = !self.desktop_open,
            ViewportMode::Mobile => self.mobile_open = !self.mobile_open,
        }
    }

    /// Any document click. If an open popover was clicked outside of, both
    /// popovers close so no stale open state survives a layout switch.
    pub fn dismiss_on_outside_click(&mut self, hits: ProfileHits) -> bool {
        let desktop_outside = self.desktop_open && !hits.desktop;
        let mobile_outside = self.mobile_open && !hits.mobile;
        if !(desktop_outside || mobile_outside) {
            return false;
        }
        self.close_all();
        true
    }

    /// Layout pass hook: the desktop panel is never left open by mobile logic.
    pub fn settle_for_layout(&mut self, mode: ViewportMode) {
        if mode.is_desktop() {
            self.desktop_open = false;
        }
    }

    pub fn close_all(&mut self) {
        self.desktop_open = false;
        self.mobile_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_inside_icon_or_panel_keeps_popover_open() {
        let mut popovers = ProfilePopovers::default();
        popovers.toggle(ViewportMode::Mobile);
        let inside = ProfileHits { desktop: false, mobile: true };
        assert!(!popovers.dismiss_on_outside_click(inside));
        assert!(popovers.is_open(ViewportMode::Mobile));
    }

    #[test]
    fn click_outside_closes_popover() {
        let mut popovers = ProfilePopovers::default();
        popovers.toggle(ViewportMode::Mobile);
        assert!(popovers.dismiss_on_outside_click(ProfileHits::default()));
        assert!(!popovers.is_open(ViewportMode::Mobile));
    }

    #[test]
    fn outside_click_on_one_closes_both() {
        let mut popovers = ProfilePopovers::default();
        popovers.toggle(ViewportMode::Desktop);
        popovers.toggle(ViewportMode::Mobile);
        // Inside the mobile widget, but outside the open desktop one
        let hits = ProfileHits { desktop: false, mobile: true };
        assert!(popovers.dismiss_on_outside_click(hits));
        assert!(!popovers.is_open(ViewportMode::Desktop));
        assert!(!popovers.is_open(ViewportMode::Mobile));
    }

    #[test]
    fn closed_popovers_ignore_clicks() {
        let mut popovers = ProfilePopovers::default();
        assert!(!popovers.dismiss_on_outside_click(ProfileHits::default()));
    }

    #[test]
    fn desktop_layout_hides_desktop_panel() {
        let mut popovers = ProfilePopovers::default();
        popovers.toggle(ViewportMode::Desktop);
        popovers.toggle(ViewportMode::Mobile);
        popovers.settle_for_layout(ViewportMode::Mobile);
        assert!(popovers.is_open(ViewportMode::Desktop));
        popovers.settle_for_layout(ViewportMode::Desktop);
        assert!(!popovers.is_open(ViewportMode::Desktop));
        assert!(popovers.is_open(ViewportMode::Mobile));
    }
}
