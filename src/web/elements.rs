//! Typed registry of every element the controllers touch.
//!
//! Looked up once at start-up. Anything the page does not contain is `None`
//! (or an empty list) and is skipped by bindings and rendering alike.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement, Window};

use super::PageError;
use crate::config::PAGE;
use crate::domain::ViewportMode;
use crate::domain::currency::parse_inr;
use crate::ui::OpeningEdge;

pub struct DropdownElements {
    /// The `.dropdown` wrapper receiving pointer-enter / pointer-leave
    pub root: Element,
    /// First link inside the wrapper; clicked on mobile
    pub anchor: Option<Element>,
    pub content: Option<Element>,
}

#[derive(Default)]
pub struct CarouselElements {
    pub track: Option<HtmlElement>,
    pub slide_count: usize,
    /// One button per slide, created at start-up
    pub dots: Vec<Element>,
    pub prev: Option<Element>,
    pub next: Option<Element>,
}

pub struct PriceElement {
    pub element: Element,
    /// Immutable source amount read from the price's data attribute
    pub inr: f64,
}

pub struct Elements {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub dropdowns: Vec<DropdownElements>,
    pub menu_toggle: Option<Element>,
    pub nav_menu: Option<Element>,
    pub logo_desktop: Option<Element>,
    pub logo_mobile: Option<Element>,
    pub profile_icon_desktop: Option<Element>,
    pub profile_icon_mobile: Option<Element>,
    pub profile_panel_desktop: Option<Element>,
    pub profile_panel_mobile: Option<Element>,
    pub carousel: CarouselElements,
    pub currency_select: Option<HtmlSelectElement>,
    pub prices: Vec<PriceElement>,
}

impl Elements {
    pub fn bind() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;
        let body = document.body().ok_or(PageError::NoBody)?;
        let sel = &PAGE.selectors;

        let dropdowns = query_all(&document, sel.dropdown)
            .into_iter()
            .map(|root| DropdownElements {
                anchor: query_in(&root, sel.dropdown_anchor),
                content: query_in(&root, sel.dropdown_content),
                root,
            })
            .collect();

        let carousel = bind_carousel(&document);

        let prices = query_all(&document, sel.price)
            .into_iter()
            .filter_map(|element| {
                let inr = element.get_attribute(sel.price_inr_attr).as_deref().and_then(parse_inr);
                if inr.is_none() {
                    log::debug!("Skipping price element without a usable {}", sel.price_inr_attr);
                }
                Some(PriceElement { inr: inr?, element })
            })
            .collect();

        let by_id = |id: &str| document.get_element_by_id(id);

        Ok(Self {
            menu_toggle: by_id(sel.mobile_menu_toggle_id),
            nav_menu: by_id(sel.nav_menu_id),
            logo_desktop: by_id(sel.logo_desktop_id),
            logo_mobile: by_id(sel.logo_mobile_id),
            profile_icon_desktop: by_id(sel.profile_icon_desktop_id),
            profile_icon_mobile: by_id(sel.profile_icon_mobile_id),
            profile_panel_desktop: by_id(sel.profile_panel_desktop_id),
            profile_panel_mobile: by_id(sel.profile_panel_mobile_id),
            currency_select: by_id(sel.currency_select_id)
                .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok()),
            dropdowns,
            carousel,
            prices,
            window,
            document,
            body,
        })
    }

    /// Current viewport width in CSS pixels (0 if the browser won't say).
    pub fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    pub fn logo(&self, variant: ViewportMode) -> Option<&Element> {
        match variant {
            ViewportMode::Desktop => self.logo_desktop.as_ref(),
            ViewportMode::Mobile => self.logo_mobile.as_ref(),
        }
    }

    pub fn profile_icon(&self, variant: ViewportMode) -> Option<&Element> {
        match variant {
            ViewportMode::Desktop => self.profile_icon_desktop.as_ref(),
            ViewportMode::Mobile => self.profile_icon_mobile.as_ref(),
        }
    }

    pub fn profile_panel(&self, variant: ViewportMode) -> Option<&Element> {
        match variant {
            ViewportMode::Desktop => self.profile_panel_desktop.as_ref(),
            ViewportMode::Mobile => self.profile_panel_mobile.as_ref(),
        }
    }

    /// Where dropdown `index` should open, from its rendered trigger box.
    /// Call with the panel shown; a panel without layout yields `None`.
    pub fn measure_edge(&self, index: usize) -> Option<OpeningEdge> {
        let dropdown = self.dropdowns.get(index)?;
        let content = dropdown.content.as_ref()?;
        let trigger = dropdown.anchor.as_ref().unwrap_or(&dropdown.root);
        let left = trigger.get_bounding_client_rect().left();

        let mut panel_width = content.get_bounding_client_rect().width();
        if panel_width <= 0.0 {
            panel_width = f64::from(content.scroll_width());
        }
        if panel_width <= 0.0 {
            return None;
        }
        Some(OpeningEdge::for_bounds(left, panel_width, self.viewport_width()))
    }
}

fn bind_carousel(document: &Document) -> CarouselElements {
    let sel = &PAGE.selectors;
    let slide_count = query_all(document, sel.carousel_slide).len();

    let mut dots = Vec::with_capacity(slide_count);
    if let Some(container) = query_one(document, sel.carousel_dots) {
        for _ in 0..slide_count {
            let dot = match document.create_element("button") {
                Ok(dot) => dot,
                Err(e) => {
                    log::warn!("Could not create carousel dot: {e:?}");
                    break;
                }
            };
            if container.append_child(&dot).is_ok() {
                dots.push(dot);
            }
        }
    }

    CarouselElements {
        track: query_one(document, sel.carousel_track)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        slide_count,
        dots,
        prev: query_one(document, sel.carousel_prev),
        next: query_one(document, sel.carousel_next),
    }
}

fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_in(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("Invalid selector {selector}");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
