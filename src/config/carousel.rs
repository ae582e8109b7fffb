//! Carousel autoplay configuration.

/// How the carousel advances on its own
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplayPolicy {
    /// Arm the autoplay timer once the window `load` event has fired
    pub enabled: bool,
    /// Milliseconds between two automatic `next()` calls
    pub interval_ms: u32,
    /// Re-arm the timer after prev/next/dot navigation so a manual choice
    /// stays on screen for a full interval. `false` keeps the timer running
    /// untouched, whatever the user does.
    pub restart_on_manual_nav: bool,
}

pub struct CarouselConfig {
    pub autoplay: AutoplayPolicy,
}

pub const CAROUSEL: CarouselConfig = CarouselConfig {
    autoplay: AutoplayPolicy {
        enabled: true,
        interval_ms: 5000,
        restart_on_manual_nav: false,
    },
};
