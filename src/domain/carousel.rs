use crate::config::AutoplayPolicy;

/// Position of a slide carousel over a fixed number of slides.
///
/// `count` is taken from the page once at start-up. With zero slides every
/// navigation call is a no-op.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    count: usize,
}

impl CarouselState {
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Step back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.current = (self.current + self.count - 1) % self.count;
        true
    }

    /// Step forward one slide, wrapping from the last to the first.
    pub fn next(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.current = (self.current + 1) % self.count;
        true
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn goto(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.current = index;
        true
    }

    /// Horizontal shift of the slide track, in percent of its width.
    pub fn offset_percent(&self) -> usize {
        self.current * 100
    }

    /// CSS transform that shows the current slide.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.offset_percent())
    }

    pub fn is_dot_active(&self, dot: usize) -> bool {
        !self.is_empty() && dot == self.current
    }
}

/// Bookkeeping for the autoplay timer. The timer itself lives with the
/// runtime; this only decides when it must be armed or restarted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayGate {
    loaded: bool,
    armed: bool,
}

impl AutoplayGate {
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// The window finished loading. Returns true when the timer must be armed
    /// now; at most once, and never for an empty carousel.
    pub fn on_load(&mut self, policy: &AutoplayPolicy, carousel: &CarouselState) -> bool {
        self.loaded = true;
        if self.armed || !policy.enabled || carousel.is_empty() {
            return false;
        }
        self.armed = true;
        true
    }

    /// Whether a slide move needs the running timer restarted.
    pub fn should_restart(&self, policy: &AutoplayPolicy, manual_slide: bool) -> bool {
        self.armed && manual_slide && policy.restart_on_manual_nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_dots(state: &CarouselState) -> Vec<usize> {
        (0..state.count()).filter(|&i| state.is_dot_active(i)).collect()
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut c = CarouselState::new(3);
        assert!(c.prev());
        assert_eq!(c.current(), 2);
        assert!(c.next());
        assert!(c.next());
        assert_eq!(c.current(), 1);
        c.next();
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn index_stays_in_range_over_mixed_sequences() {
        for n in 1..6 {
            let mut c = CarouselState::new(n);
            // Deterministic mixed walk
            for step in 0..50usize {
                if step % 3 == 0 { c.prev() } else { c.next() };
                assert!(c.current() < n, "n={n} step={step}");
                assert_eq!(active_dots(&c), vec![c.current()]);
            }
        }
    }

    #[test]
    fn next_then_prev_round_trips() {
        for n in 1..6 {
            for start in 0..n {
                let mut c = CarouselState::new(n);
                c.goto(start);
                c.next();
                c.prev();
                assert_eq!(c.current(), start);
                c.prev();
                c.next();
                assert_eq!(c.current(), start);
            }
        }
    }

    #[test]
    fn empty_carousel_ignores_everything() {
        let mut c = CarouselState::new(0);
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.goto(0));
        assert_eq!(c.current(), 0);
        assert!(active_dots(&c).is_empty());
        assert!(!c.is_dot_active(0));
    }

    #[test]
    fn goto_rejects_out_of_range() {
        let mut c = CarouselState::new(4);
        assert!(c.goto(3));
        assert!(!c.goto(4));
        assert_eq!(c.current(), 3);
        assert_eq!(c.track_transform(), "translateX(-300%)");
    }

    const ALWAYS_ON: AutoplayPolicy = AutoplayPolicy {
        enabled: true,
        interval_ms: 5000,
        restart_on_manual_nav: false,
    };

    #[test]
    fn autoplay_is_armed_once_after_load() {
        let carousel = CarouselState::new(3);
        let mut gate = AutoplayGate::default();
        assert!(!gate.is_armed());

        assert!(gate.on_load(&ALWAYS_ON, &carousel));
        assert!(gate.is_loaded() && gate.is_armed());
        // A second load event must not stack another timer
        assert!(!gate.on_load(&ALWAYS_ON, &carousel));
    }

    #[test]
    fn autoplay_never_arms_without_slides_or_when_disabled() {
        let mut gate = AutoplayGate::default();
        assert!(!gate.on_load(&ALWAYS_ON, &CarouselState::new(0)));
        assert!(gate.is_loaded() && !gate.is_armed());

        let disabled = AutoplayPolicy {
            enabled: false,
            ..ALWAYS_ON
        };
        let mut gate = AutoplayGate::default();
        assert!(!gate.on_load(&disabled, &CarouselState::new(4)));
        assert!(!gate.is_armed());
    }

    #[test]
    fn restart_only_follows_manual_moves_when_configured() {
        let carousel = CarouselState::new(2);
        let restarting = AutoplayPolicy {
            restart_on_manual_nav: true,
            ..ALWAYS_ON
        };

        let mut gate = AutoplayGate::default();
        assert!(!gate.should_restart(&restarting, true), "nothing armed yet");

        gate.on_load(&restarting, &carousel);
        assert!(gate.should_restart(&restarting, true));
        assert!(!gate.should_restart(&restarting, false));
        assert!(!gate.should_restart(&ALWAYS_ON, true));
    }
}
