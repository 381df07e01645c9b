use crate::shared::focus::focus_next_tick;
use contracts::shared::ModalState;
use leptos::html;
use leptos::prelude::*;

/// Central handle for the result dialog: its state plus the close control
/// that receives focus when it opens.
#[derive(Clone, Copy)]
pub struct ModalService {
    state: RwSignal<ModalState>,
    close_button: NodeRef<html::Button>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ModalState::new()),
            close_button: NodeRef::new(),
        }
    }

    /// Show the dialog with a formatted volume and move focus to its close control.
    pub fn open(&self, value: String) {
        self.state.update(|m| m.open(value));
        if let Some(message) = self.state.with_untracked(|m| m.message()) {
            log::debug!("result dialog opened: {}", message);
        }
        let close_button = self.close_button;
        focus_next_tick(move || close_button.get_untracked().map(Into::into));
    }

    pub fn close(&self) {
        self.state.update(|m| m.close());
        log::debug!("result dialog closed");
    }

    /// Tracked visibility.
    pub fn is_open(&self) -> bool {
        self.state.with(|m| m.is_visible())
    }

    /// Tracked formatted value of the last calculation.
    pub fn value(&self) -> Option<String> {
        self.state.with(|m| m.value().map(str::to_string))
    }

    /// Route a keydown to the dialog. Only Escape on an open dialog has an
    /// effect; other keys never touch the signal.
    pub fn handle_key(&self, key: &str) {
        if self.state.with_untracked(|m| m.closes_on_key(key)) {
            self.state.update(|m| m.close());
            log::debug!("result dialog closed by {}", key);
        }
    }

    /// Route a backdrop click; `direct` is true when the click target is the backdrop itself.
    pub fn handle_backdrop_click(&self, direct: bool) {
        if self.state.with_untracked(|m| m.closes_on_backdrop_click(direct)) {
            self.state.update(|m| m.close());
            log::debug!("result dialog closed by backdrop click");
        }
    }

    pub fn close_button(&self) -> NodeRef<html::Button> {
        self.close_button
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}
