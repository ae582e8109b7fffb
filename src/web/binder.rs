use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};

use super::elements::Elements;
use super::runtime::{WebRuntime, dispatch};
use crate::engine::{Binder, BindingKey, PageEvent};

/// Attaches the DOM listeners behind each `BindingKey`.
///
/// A handle is the list of `EventListener` guards for one key; dropping it
/// removes exactly those listeners from the page.
pub struct DomBinder {
    elements: Rc<Elements>,
    runtime: Weak<RefCell<WebRuntime>>,
}

impl DomBinder {
    pub fn new(elements: Rc<Elements>, runtime: Weak<RefCell<WebRuntime>>) -> Self {
        Self { elements, runtime }
    }
}

impl Binder for DomBinder {
    type Handle = Vec<EventListener>;

    fn attach(&mut self, key: BindingKey) -> Option<Self::Handle> {
        match key {
            BindingKey::DropdownHover(index) => {
                let root = &self.elements.dropdowns.get(index)?.root;

                let runtime = self.runtime.clone();
                let elements = Rc::clone(&self.elements);
                let enter = EventListener::new(root, "mouseenter", move |e| {
                    dispatch(&runtime, PageEvent::DropdownEnter { index }, Some(e));
                    // The panel is rendered open now, so it has a real width
                    if let Some(edge) = elements.measure_edge(index) {
                        dispatch(&runtime, PageEvent::DropdownMeasured { index, edge }, Some(e));
                    }
                });

                let runtime = self.runtime.clone();
                let leave = EventListener::new(root, "mouseleave", move |e| {
                    dispatch(&runtime, PageEvent::DropdownLeave { index }, Some(e));
                });

                Some(vec![enter, leave])
            }
            BindingKey::DropdownClick(index) => {
                let anchor = self.elements.dropdowns.get(index)?.anchor.as_ref()?;
                let runtime = self.runtime.clone();
                // Not passive: the handler may cancel link navigation
                let click = EventListener::new_with_options(
                    anchor,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |e| dispatch(&runtime, PageEvent::DropdownClick { index }, Some(e)),
                );
                Some(vec![click])
            }
            BindingKey::MenuToggle => {
                let toggle = self.elements.menu_toggle.as_ref()?;
                let runtime = self.runtime.clone();
                let click = EventListener::new(toggle, "click", move |e| {
                    dispatch(&runtime, PageEvent::MenuToggleClick, Some(e));
                });
                Some(vec![click])
            }
            BindingKey::MenuOutsideClick => {
                // Without the panel there is nothing to dismiss
                self.elements.nav_menu.as_ref()?;
                let runtime = self.runtime.clone();
                let elements = Rc::clone(&self.elements);
                let outside = EventListener::new(&self.elements.document, "click", move |e| {
                    let target = event_target_node(e);
                    let event = PageEvent::MenuOutsideClick {
                        in_panel: contains(elements.nav_menu.as_ref(), target.as_ref()),
                        in_toggle: contains(elements.menu_toggle.as_ref(), target.as_ref()),
                    };
                    dispatch(&runtime, event, Some(e));
                });
                Some(vec![outside])
            }
            BindingKey::DarkModeLogo(variant) => {
                let logo = self.elements.logo(variant)?;
                let runtime = self.runtime.clone();
                let click = EventListener::new(logo, "click", move |e| {
                    dispatch(&runtime, PageEvent::LogoClick(variant), Some(e));
                });
                Some(vec![click])
            }
            BindingKey::ProfileIconClick(variant) => {
                let icon = self.elements.profile_icon(variant)?;
                self.elements.profile_panel(variant)?;
                let runtime = self.runtime.clone();
                let click = EventListener::new(icon, "click", move |e| {
                    dispatch(&runtime, PageEvent::ProfileIconClick(variant), Some(e));
                });
                Some(vec![click])
            }
        }
    }
}

pub(crate) fn event_target_node(event: &Event) -> Option<Node> {
    event.target()?.dyn_into::<Node>().ok()
}

/// Whether `target` is `element` or one of its descendants.
pub(crate) fn contains(element: Option<&Element>, target: Option<&Node>) -> bool {
    element.is_some_and(|el| el.contains(target))
}
