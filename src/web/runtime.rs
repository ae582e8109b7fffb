//! Page lifecycle on the browser: start-up ordering, permanent listeners,
//! event dispatch into the engine, autoplay and the rate fetch.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use web_sys::{DocumentReadyState, Event, HtmlSelectElement};

use super::PageError;
use super::binder::{DomBinder, contains, event_target_node};
use super::elements::Elements;
use super::render;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{CAROUSEL, CURRENCY, LAYOUT, PAGE};
use crate::data::{ExchangeRateHost, fetch_with_retry};
use crate::domain::{Currency, ViewportMode};
use crate::engine::{PageEngine, PageEvent, PageState};
use crate::ui::{DarkMode, DropdownSet, ProfileHits};

pub struct WebRuntime {
    engine: PageEngine<Vec<EventListener>>,
    elements: Rc<Elements>,
    /// Listeners that live as long as the page (resize, carousel, currency...)
    #[allow(dead_code)] // held for their Drop
    permanent: Vec<EventListener>,
    /// Dropping the interval stops autoplay
    #[allow(dead_code)] // held for its Drop
    autoplay: Option<Interval>,
    /// Pending debounced layout pass; replacing it cancels the previous one
    #[allow(dead_code)] // held for its Drop
    pending_layout: Option<Timeout>,
}

type SharedRuntime = Rc<RefCell<WebRuntime>>;

thread_local! {
    static PAGE_RUNTIME: RefCell<Option<SharedRuntime>> = const { RefCell::new(None) };
}

/// Mount once the DOM is parsed (immediately if it already is).
pub fn mount_when_ready() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;

    if document.ready_state() != DocumentReadyState::Loading {
        return mount();
    }

    EventListener::once(&document, "DOMContentLoaded", |_| {
        if let Err(e) = mount() {
            log::error!("Page controls not started: {e}");
        }
    })
    .forget();
    Ok(())
}

/// Drop the runtime: every listener, the autoplay timer and any pending
/// layout pass go with it. An in-flight rate fetch finds nothing to update.
pub fn unmount() {
    let runtime = PAGE_RUNTIME.with(|slot| slot.borrow_mut().take());
    if runtime.is_some() {
        log::info!("Page controls torn down");
    }
}

fn mount() -> Result<(), PageError> {
    unmount();

    let elements = Rc::new(Elements::bind()?);
    let runtime = Rc::new(RefCell::new(WebRuntime::new(Rc::clone(&elements))));

    // 1. First layout pass, before anything else may touch the page
    relayout(&runtime);

    // 2. Listeners that never depend on the layout mode
    let permanent = bind_permanent(&elements, Rc::downgrade(&runtime));
    runtime.borrow_mut().permanent = permanent;

    // 3. Autoplay after the window has fully loaded
    if elements.document.ready_state() == DocumentReadyState::Complete {
        start_autoplay(&runtime);
    } else {
        let weak = Rc::downgrade(&runtime);
        let on_load = EventListener::once(&elements.window, "load", move |_| {
            if let Some(runtime) = weak.upgrade() {
                start_autoplay(&runtime);
            }
        });
        runtime.borrow_mut().permanent.push(on_load);
    }

    // 4. Live exchange rate
    let fetch = runtime
        .try_borrow_mut()
        .map(|mut rt| rt.engine.begin_rate_fetch())
        .unwrap_or(false);
    if fetch {
        spawn_rate_fetch(Rc::downgrade(&runtime));
    }

    log::info!(
        "Page controls ready: {} dropdowns, {} slides, {} prices",
        elements.dropdowns.len(),
        elements.carousel.slide_count,
        elements.prices.len()
    );
    PAGE_RUNTIME.with(|slot| *slot.borrow_mut() = Some(runtime));
    Ok(())
}

impl WebRuntime {
    fn new(elements: Rc<Elements>) -> Self {
        let dropdowns = DropdownSet::new(elements.dropdowns.iter().map(|d| d.content.is_some()));
        let mut state = PageState::new(dropdowns, elements.carousel.slide_count);

        // Respect what the markup already shows
        state.dark_mode = DarkMode::new(elements.body.class_list().contains(PAGE.flags.body_dark));
        let initial_currency = elements
            .currency_select
            .as_ref()
            .map(|select| Currency::from_selector_value(&select.value()))
            .unwrap_or_default();
        state.currency.set_display(initial_currency);

        if initial_currency == Currency::Usd {
            render::sync_prices(&elements, &state.currency);
        }

        Self {
            engine: PageEngine::new(state),
            elements,
            permanent: Vec::new(),
            autoplay: None,
            pending_layout: None,
        }
    }
}

/// Hand one event to the engine and render the outcome.
pub(crate) fn dispatch(runtime: &Weak<RefCell<WebRuntime>>, event: PageEvent, dom_event: Option<&Event>) {
    let Some(runtime) = runtime.upgrade() else {
        return;
    };
    let Ok(mut rt) = runtime.try_borrow_mut() else {
        log::warn!("Dropped {event:?}: page controls busy");
        return;
    };

    let reaction = rt.engine.handle(event);

    if reaction.prevent_default {
        if let Some(e) = dom_event {
            e.prevent_default();
        }
    }

    render::sync_flags(&rt.elements, rt.engine.state());
    if reaction.refresh_prices {
        render::sync_prices(&rt.elements, &rt.engine.state().currency);
    }

    if rt.engine.should_restart_autoplay(&CAROUSEL.autoplay, &reaction) {
        // Replacing the interval cancels the old one
        rt.autoplay = Some(autoplay_interval(Rc::downgrade(&runtime)));
    }
}

/// The responsive re-binder, run at mount and after (debounced) resizes.
fn relayout(runtime: &SharedRuntime) {
    let weak = Rc::downgrade(runtime);
    let Ok(mut rt) = runtime.try_borrow_mut() else {
        log::warn!("Layout pass skipped: page controls busy");
        return;
    };

    let elements = Rc::clone(&rt.elements);
    let mut binder = DomBinder::new(Rc::clone(&elements), weak);
    rt.engine
        .apply_responsive_layout(elements.viewport_width(), &mut binder);

    render::sync_flags(&elements, rt.engine.state());
}

fn schedule_relayout(runtime: &SharedRuntime) {
    if LAYOUT.resize_debounce_ms == 0 {
        relayout(runtime);
        return;
    }
    let weak = Rc::downgrade(runtime);
    let timeout = Timeout::new(LAYOUT.resize_debounce_ms, move || {
        if let Some(runtime) = weak.upgrade() {
            relayout(&runtime);
        }
    });
    if let Ok(mut rt) = runtime.try_borrow_mut() {
        rt.pending_layout = Some(timeout);
    }
}

fn bind_permanent(elements: &Rc<Elements>, runtime: Weak<RefCell<WebRuntime>>) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    // --- RESIZE ---
    let weak = runtime.clone();
    listeners.push(EventListener::new(&elements.window, "resize", move |_| {
        if let Some(runtime) = weak.upgrade() {
            schedule_relayout(&runtime);
        }
    }));

    // --- PROFILE OUTSIDE CLICK (both layouts) ---
    {
        let weak = runtime.clone();
        let els = Rc::clone(elements);
        listeners.push(EventListener::new(&elements.document, "click", move |e| {
            let target = event_target_node(e);
            let mut hits = ProfileHits::default();
            for variant in ViewportMode::iter() {
                let inside = contains(els.profile_icon(variant), target.as_ref())
                    || contains(els.profile_panel(variant), target.as_ref());
                match variant {
                    ViewportMode::Desktop => hits.desktop = inside,
                    ViewportMode::Mobile => hits.mobile = inside,
                }
            }
            dispatch(&weak, PageEvent::ProfileOutsideClick(hits), Some(e));
        }));
    }

    // --- CAROUSEL ---
    let carousel = &elements.carousel;
    if let Some(prev) = &carousel.prev {
        let weak = runtime.clone();
        listeners.push(EventListener::new(prev, "click", move |e| {
            dispatch(&weak, PageEvent::CarouselPrev, Some(e));
        }));
    }
    if let Some(next) = &carousel.next {
        let weak = runtime.clone();
        listeners.push(EventListener::new(next, "click", move |e| {
            dispatch(&weak, PageEvent::CarouselNext, Some(e));
        }));
    }
    for (index, dot) in carousel.dots.iter().enumerate() {
        let weak = runtime.clone();
        listeners.push(EventListener::new(dot, "click", move |e| {
            dispatch(&weak, PageEvent::CarouselDot(index), Some(e));
        }));
    }

    // --- CURRENCY ---
    if let Some(select) = &elements.currency_select {
        let weak = runtime.clone();
        listeners.push(EventListener::new(select, "change", move |e| {
            let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            let currency = Currency::from_selector_value(&select.value());
            dispatch(&weak, PageEvent::CurrencySelected(currency), Some(e));
        }));
    }

    listeners
}

fn autoplay_interval(runtime: Weak<RefCell<WebRuntime>>) -> Interval {
    Interval::new(CAROUSEL.autoplay.interval_ms, move || {
        dispatch(&runtime, PageEvent::AutoplayTick, None);
    })
}

fn start_autoplay(runtime: &SharedRuntime) {
    let policy = CAROUSEL.autoplay;
    let Ok(mut rt) = runtime.try_borrow_mut() else {
        return;
    };
    if !rt.engine.arm_autoplay_on_load(&policy) {
        return;
    }
    rt.autoplay = Some(autoplay_interval(Rc::downgrade(runtime)));

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_carousel {
        log::info!("[carousel] autoplay armed every {} ms", policy.interval_ms);
    }
}

fn spawn_rate_fetch(runtime: Weak<RefCell<WebRuntime>>) {
    wasm_bindgen_futures::spawn_local(async move {
        let source = ExchangeRateHost::from_config();
        let result = fetch_with_retry(&source, &CURRENCY.client).await;
        // Posting a result after unmount is a no-op
        dispatch(&runtime, PageEvent::RateFetched(result), None);
    });
}
