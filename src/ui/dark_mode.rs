/// Page-wide dark display flag. Not persisted across reloads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DarkMode {
    enabled: bool,
}

impl DarkMode {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}
