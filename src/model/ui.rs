//! UI Model
//!
//! This sub-model contains state related to the user interface:
//! preferences, the toast line and the quit flag.

use std::time::{Duration, Instant};

use super::types::VimCommandState;

/// Default screen title
pub const DEFAULT_TITLE: &str = "Mixer-Table";

/// Default time a toast stays on screen
pub const DEFAULT_TOAST_MS: u64 = 1500;

/// UI preferences and transient messages
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Title shown in the title bar
    pub title: String,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// How long a toast stays visible
    pub toast_ms: u64,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(title: String, vim_mode: bool) -> Self {
        Self {
            title,
            vim_mode,
            vim_command_state: VimCommandState::None,
            toast_message: None,
            toast_ms: DEFAULT_TOAST_MS,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis(), self.toast_ms)
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    /// When the current toast expires
    pub fn toast_deadline(&self) -> Option<Instant> {
        self.toast_message
            .as_ref()
            .map(|(_, shown_at)| *shown_at + Duration::from_millis(self.toast_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(DEFAULT_TITLE.to_string(), false);
        assert_eq!(model.title, "Mixer-Table");
        assert!(!model.vim_mode);
        assert!(!model.should_quit);
        assert_eq!(model.vim_command_state, VimCommandState::None);
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(DEFAULT_TITLE.to_string(), false);
        assert!(model.toast_message.is_none());
        assert!(model.toast_deadline().is_none());

        model.show_toast("Shuffled".to_string());
        assert!(model.toast_message.is_some());
        assert!(model.toast_deadline().is_some());
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }

    #[test]
    fn test_zero_length_toast_expires_immediately() {
        let mut model = UiModel::new(DEFAULT_TITLE.to_string(), false);
        model.toast_ms = 0;
        model.show_toast("gone".to_string());
        assert!(model.should_dismiss_toast());
    }
}
