/// Edge of the trigger a dropdown panel lines up with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OpeningEdge {
    /// Panel's start edge sits on the trigger's start edge (the stylesheet default)
    #[default]
    Start,
    /// Panel's end edge sits on the trigger's end edge, so it grows inwards
    End,
}

impl OpeningEdge {
    /// Pick the edge from the trigger's rendered box. A panel that would run
    /// past the right side of the viewport opens from the trigger's end edge.
    pub fn for_bounds(trigger_left: f64, panel_width: f64, viewport_width: f64) -> Self {
        if trigger_left + panel_width > viewport_width {
            OpeningEdge::End
        } else {
            OpeningEdge::Start
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DropdownPanel {
    pub open: bool,
    pub edge: OpeningEdge,
}

/// Open state of every navigation dropdown, in document order.
///
/// A trigger without a content panel is kept as `None` so indices line up with
/// the page; every operation on it is a no-op.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DropdownSet {
    panels: Vec<Option<DropdownPanel>>,
}

impl DropdownSet {
    pub fn new(has_content: impl IntoIterator<Item = bool>) -> Self {
        Self {
            panels: has_content
                .into_iter()
                .map(|has| has.then(DropdownPanel::default))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panel(&self, index: usize) -> Option<&DropdownPanel> {
        self.panels.get(index)?.as_ref()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.panel(index).is_some_and(|p| p.open)
    }

    pub fn open_indices(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.is_open(i)).collect()
    }

    /// Desktop pointer-enter.
    pub fn hover_enter(&mut self, index: usize) -> bool {
        let Some(Some(panel)) = self.panels.get_mut(index) else {
            return false;
        };
        panel.open = true;
        true
    }

    /// Opening edge measured once the panel is rendered open. A panel that
    /// closed in the meantime keeps its previous edge.
    pub fn align(&mut self, index: usize, edge: OpeningEdge) -> bool {
        let Some(Some(panel)) = self.panels.get_mut(index) else {
            return false;
        };
        if !panel.open {
            return false;
        }
        panel.edge = edge;
        true
    }

    /// Desktop pointer-leave.
    pub fn hover_leave(&mut self, index: usize) -> bool {
        let Some(Some(panel)) = self.panels.get_mut(index) else {
            return false;
        };
        panel.open = false;
        true
    }

    /// Mobile click: close every other panel, then flip this one.
    ///
    /// Returns false for a trigger without content, meaning the click was not
    /// handled and the link should navigate as usual.
    pub fn toggle_exclusive(&mut self, index: usize) -> bool {
        if self.panel(index).is_none() {
            return false;
        }
        for (i, panel) in self.panels.iter_mut().enumerate() {
            if let Some(panel) = panel {
                panel.open = if i == index { !panel.open } else { false };
            }
        }
        true
    }

    pub fn close_all(&mut self) {
        for panel in self.panels.iter_mut().flatten() {
            panel.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_b_closes_a_on_mobile() {
        let mut set = DropdownSet::new([true, true, true]);
        assert!(set.toggle_exclusive(0));
        assert_eq!(set.open_indices(), vec![0]);
        assert!(set.toggle_exclusive(1));
        assert_eq!(set.open_indices(), vec![1]);
        assert!(set.toggle_exclusive(1));
        assert!(set.open_indices().is_empty());
    }

    #[test]
    fn single_open_invariant_survives_any_click_order() {
        let mut set = DropdownSet::new([true, false, true, true]);
        for &i in &[0, 2, 2, 3, 1, 0, 3, 3, 2] {
            set.toggle_exclusive(i);
            assert!(set.open_indices().len() <= 1);
        }
    }

    #[test]
    fn trigger_without_content_is_ignored() {
        let mut set = DropdownSet::new([true, false]);
        set.toggle_exclusive(0);
        assert!(!set.toggle_exclusive(1));
        assert_eq!(set.open_indices(), vec![0]);
        assert!(!set.hover_enter(1));
        assert!(!set.align(1, OpeningEdge::End));
        assert!(!set.hover_leave(1));
        assert!(!set.toggle_exclusive(7));
    }

    #[test]
    fn hover_opens_and_closes_independently() {
        let mut set = DropdownSet::new([true, true]);
        set.hover_enter(0);
        set.hover_enter(1);
        assert!(set.align(0, OpeningEdge::End));
        assert_eq!(set.open_indices(), vec![0, 1]);
        assert_eq!(set.panel(0).map(|p| p.edge), Some(OpeningEdge::End));
        set.hover_leave(0);
        assert_eq!(set.open_indices(), vec![1]);
        set.close_all();
        assert!(set.open_indices().is_empty());
    }

    #[test]
    fn edge_is_only_taken_from_an_open_panel() {
        let mut set = DropdownSet::new([true]);
        // Measured while hidden: nothing to align yet
        assert!(!set.align(0, OpeningEdge::End));
        assert_eq!(set.panel(0).map(|p| p.edge), Some(OpeningEdge::Start));

        set.hover_enter(0);
        assert!(set.align(0, OpeningEdge::End));
        set.hover_leave(0);
        assert!(!set.align(0, OpeningEdge::Start));
        assert_eq!(set.panel(0).map(|p| p.edge), Some(OpeningEdge::End));
    }

    #[test]
    fn panel_flips_when_it_would_overflow() {
        assert_eq!(OpeningEdge::for_bounds(100.0, 200.0, 1024.0), OpeningEdge::Start);
        assert_eq!(OpeningEdge::for_bounds(900.0, 200.0, 1024.0), OpeningEdge::End);
        assert_eq!(OpeningEdge::for_bounds(824.0, 200.0, 1024.0), OpeningEdge::Start);
    }
}
