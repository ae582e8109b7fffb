#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::AutoplayPolicy;
use crate::domain::{AutoplayGate, Currency, ViewportMode, classify};

use super::bindings::{Binder, BindingRegistry, bindings_for};
use super::messages::{PageEvent, Reaction};
use super::state::PageState;

/// Owns the page state and the mode-specific bindings.
///
/// `H` is whatever a `Binder` hands back for one key: DOM listener guards in
/// the browser, counters in tests.
#[derive(Debug)]
pub struct PageEngine<H> {
    state: PageState,
    registry: BindingRegistry<H>,
    /// Mode chosen by the last layout pass. `None` before the first one.
    mode: Option<ViewportMode>,
    autoplay: AutoplayGate,
    rate_fetch_started: bool,
}

impl<H> PageEngine<H> {
    pub fn new(state: PageState) -> Self {
        Self {
            state,
            registry: BindingRegistry::default(),
            mode: None,
            autoplay: AutoplayGate::default(),
            rate_fetch_started: false,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn mode(&self) -> Option<ViewportMode> {
        self.mode
    }

    pub fn registry(&self) -> &BindingRegistry<H> {
        &self.registry
    }

    pub fn autoplay(&self) -> &AutoplayGate {
        &self.autoplay
    }

    // --- START-UP ORDERING ---

    /// Window `load` fired. True when the autoplay timer must be armed now.
    /// Nothing is armed before the first layout pass.
    pub fn arm_autoplay_on_load(&mut self, policy: &AutoplayPolicy) -> bool {
        if self.mode.is_none() {
            return false;
        }
        self.autoplay.on_load(policy, &self.state.carousel)
    }

    /// Whether the outcome of an event needs the autoplay timer restarted.
    pub fn should_restart_autoplay(&self, policy: &AutoplayPolicy, reaction: &Reaction) -> bool {
        self.autoplay.should_restart(policy, reaction.manual_slide)
    }

    /// Claims the single start-up rate fetch. False before the first layout
    /// pass and on every later call.
    pub fn begin_rate_fetch(&mut self) -> bool {
        if self.mode.is_none() || self.rate_fetch_started {
            return false;
        }
        self.rate_fetch_started = true;
        true
    }

    /// The responsive layout pass. Runs at load and after every resize.
    ///
    /// Detach-then-attach happens inside this one call, so no event can ever
    /// observe both the old and the new handler set.
    pub fn apply_responsive_layout<B>(&mut self, width: f64, binder: &mut B) -> ViewportMode
    where
        B: Binder<Handle = H>,
    {
        // 1. Tear down whatever the previous pass attached
        let detached = self.registry.detach_all();

        // 2. Classify
        let mode = classify(width);

        // 3. Settle state that must not leak across modes
        if mode.is_desktop() {
            self.state.menu.close();
            self.state.dropdowns.close_all();
        }
        self.state.profile.settle_for_layout(mode);

        // 4. Attach the handler sets for this mode
        let attached = self
            .registry
            .attach_all(bindings_for(mode, self.state.dropdowns.len()), binder);
        self.mode = Some(mode);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_layout_passes {
            log::info!(
                "[layout] width {width} -> {mode}: detached {detached}, attached {attached}"
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = (detached, attached);

        mode
    }

    /// Apply one event to the page state.
    pub fn handle(&mut self, event: PageEvent) -> Reaction {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_page_events {
            log::info!("[event] {event:?} (mode {:?})", self.mode);
        }

        let mut reaction = Reaction::default();
        let state = &mut self.state;

        match event {
            // --- NAVIGATION ---
            PageEvent::DropdownEnter { index } => {
                if self.mode == Some(ViewportMode::Desktop) {
                    state.dropdowns.hover_enter(index);
                }
            }
            PageEvent::DropdownMeasured { index, edge } => {
                if self.mode == Some(ViewportMode::Desktop) {
                    state.dropdowns.align(index, edge);
                }
            }
            PageEvent::DropdownLeave { index } => {
                if self.mode == Some(ViewportMode::Desktop) {
                    state.dropdowns.hover_leave(index);
                }
            }
            PageEvent::DropdownClick { index } => {
                if self.mode == Some(ViewportMode::Mobile) {
                    reaction.prevent_default = state.dropdowns.toggle_exclusive(index);
                }
            }
            PageEvent::MenuToggleClick => {
                state.menu.toggle();
                state.dropdowns.close_all();
            }
            PageEvent::MenuOutsideClick {
                in_panel,
                in_toggle,
            } => {
                if state.menu.dismiss_on_outside_click(in_panel, in_toggle) {
                    state.dropdowns.close_all();
                }
            }

            // --- HEADER WIDGETS ---
            PageEvent::LogoClick(_) => {
                state.dark_mode.toggle();
            }
            PageEvent::ProfileIconClick(variant) => {
                state.profile.toggle(variant);
            }
            PageEvent::ProfileOutsideClick(hits) => {
                state.profile.dismiss_on_outside_click(hits);
            }

            // --- CAROUSEL ---
            PageEvent::CarouselPrev => {
                reaction.manual_slide = state.carousel.prev();
            }
            PageEvent::CarouselNext => {
                reaction.manual_slide = state.carousel.next();
            }
            PageEvent::CarouselDot(index) => {
                reaction.manual_slide = state.carousel.goto(index);
            }
            PageEvent::AutoplayTick => {
                let _moved = state.carousel.next();
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_carousel && _moved {
                    log::info!("[carousel] autoplay -> slide {}", state.carousel.current());
                }
            }

            // --- CURRENCY ---
            PageEvent::CurrencySelected(currency) => {
                state.currency.set_display(currency);
                reaction.refresh_prices = true;
            }
            PageEvent::RateFetched(Ok(rate)) => {
                if state.currency.set_rate(rate) {
                    log::info!("Exchange rate updated to {rate}");
                    // Same effect as a synthesised change event on the selector
                    reaction.refresh_prices = state.currency.display() == Currency::Usd;
                } else {
                    log::warn!(
                        "Ignoring unusable exchange rate {rate}; keeping {}",
                        state.currency.rate()
                    );
                }
            }
            PageEvent::RateFetched(Err(e)) => {
                log::warn!(
                    "Exchange rate unavailable ({e:#}); keeping {}",
                    state.currency.rate()
                );
            }
        }

        reaction
    }
}
