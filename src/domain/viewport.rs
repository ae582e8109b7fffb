use strum_macros::{Display, EnumIter};

use crate::config::LAYOUT;

/// Which interaction model the page currently uses.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    pub fn is_desktop(self) -> bool {
        self == ViewportMode::Desktop
    }
}

/// Map a viewport width (CSS pixels) onto a layout mode.
pub fn classify(width: f64) -> ViewportMode {
    if width >= LAYOUT.desktop_min_width_px {
        ViewportMode::Desktop
    } else {
        ViewportMode::Mobile
    }
}
