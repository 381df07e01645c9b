//! Visibility and content of the result dialog.

use crate::domain::a002_volume_calculator::format::result_message;

/// Key value that dismisses an open dialog.
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    visible: bool,
    value: Option<String>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Formatted volume of the most recent successful calculation.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Full sentence shown in the dialog.
    pub fn message(&self) -> Option<String> {
        self.value.as_deref().map(result_message)
    }

    /// Show the dialog with a new value, overwriting any previous one.
    pub fn open(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Whether `key` would close the dialog: only Escape, only while visible.
    pub fn closes_on_key(&self, key: &str) -> bool {
        self.visible && key == ESCAPE_KEY
    }

    /// Whether a backdrop click would close the dialog. `direct` means it
    /// landed on the backdrop itself, not on the content inside it.
    pub fn closes_on_backdrop_click(&self, direct: bool) -> bool {
        self.visible && direct
    }

    /// Escape closes a visible dialog. Returns whether the dialog closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        let closes = self.closes_on_key(key);
        if closes {
            self.close();
        }
        closes
    }

    pub fn handle_backdrop_click(&mut self, direct: bool) -> bool {
        let closes = self.closes_on_backdrop_click(direct);
        if closes {
            self.close();
        }
        closes
    }
}
