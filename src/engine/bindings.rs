//! Mode-specific event bindings.
//!
//! Every handler set that exists only in one layout mode has a `BindingKey`.
//! The registry keeps the exact handles that were attached for each key, so a
//! layout pass can drop them all and attach a fresh set without leaving stale
//! or duplicate listeners behind.

use std::collections::BTreeMap;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::ViewportMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BindingKey {
    /// pointer-enter + pointer-leave on dropdown `i` (desktop)
    DropdownHover(usize),
    /// click on the anchor of dropdown `i` (mobile)
    DropdownClick(usize),
    /// click on the slide-out menu button (mobile)
    MenuToggle,
    /// document click that dismisses the slide-out menu (mobile)
    MenuOutsideClick,
    /// click on the logo of the given layout, toggling dark mode
    DarkModeLogo(ViewportMode),
    /// click on the profile icon of the given layout
    ProfileIconClick(ViewportMode),
}

/// The complete set of keys that must be live in `mode`.
pub fn bindings_for(mode: ViewportMode, dropdown_count: usize) -> Vec<BindingKey> {
    match mode {
        ViewportMode::Desktop => (0..dropdown_count)
            .map(BindingKey::DropdownHover)
            .chain([BindingKey::DarkModeLogo(ViewportMode::Desktop)])
            .collect(),
        ViewportMode::Mobile => [BindingKey::MenuToggle, BindingKey::MenuOutsideClick]
            .into_iter()
            .chain((0..dropdown_count).map(BindingKey::DropdownClick))
            .chain([
                BindingKey::DarkModeLogo(ViewportMode::Mobile),
                BindingKey::ProfileIconClick(ViewportMode::Mobile),
            ])
            .collect(),
    }
}

/// Attaches the listeners behind one key.
///
/// Returns `None` when the element the key refers to is not on the page; the
/// key is then simply not live. Dropping the returned handle must detach
/// every listener it holds.
pub trait Binder {
    type Handle;

    fn attach(&mut self, key: BindingKey) -> Option<Self::Handle>;
}

#[derive(Debug)]
pub struct BindingRegistry<H> {
    live: BTreeMap<BindingKey, H>,
}

impl<H> Default for BindingRegistry<H> {
    fn default() -> Self {
        Self {
            live: BTreeMap::new(),
        }
    }
}

impl<H> BindingRegistry<H> {
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn is_live(&self, key: BindingKey) -> bool {
        self.live.contains_key(&key)
    }

    pub fn live_keys(&self) -> impl Iterator<Item = BindingKey> + '_ {
        self.live.keys().copied()
    }

    /// Drop every handle. Calling this on an empty registry is a no-op.
    pub fn detach_all(&mut self) -> usize {
        let detached = self.live.len();
        self.live.clear();
        detached
    }

    /// Attach each key that is not live yet. Returns how many were attached.
    pub fn attach_all<B>(&mut self, keys: impl IntoIterator<Item = BindingKey>, binder: &mut B) -> usize
    where
        B: Binder<Handle = H>,
    {
        let mut attached = 0;
        for key in keys {
            if self.live.contains_key(&key) {
                continue;
            }
            match binder.attach(key) {
                Some(handle) => {
                    self.live.insert(key, handle);
                    attached += 1;
                }
                None => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_bindings {
                        log::info!("[bindings] {key:?} skipped: element not on page");
                    }
                }
            }
        }
        attached
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::Cell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use super::{Binder, BindingKey};

    /// Stand-in for a set of DOM listeners: counts how many are alive.
    #[derive(Debug)]
    pub(crate) struct LiveToken {
        live: Rc<Cell<usize>>,
    }

    impl Drop for LiveToken {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[derive(Debug, Default)]
    pub(crate) struct CountingBinder {
        pub(crate) live: Rc<Cell<usize>>,
        pub(crate) attach_calls: usize,
        pub(crate) missing: BTreeSet<BindingKey>,
    }

    impl Binder for CountingBinder {
        type Handle = LiveToken;

        fn attach(&mut self, key: BindingKey) -> Option<LiveToken> {
            self.attach_calls += 1;
            if self.missing.contains(&key) {
                return None;
            }
            self.live.set(self.live.get() + 1);
            Some(LiveToken {
                live: Rc::clone(&self.live),
            })
        }
    }
}
