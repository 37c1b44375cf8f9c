//! Pure Application Model - Elm Architecture
//!
//! This module defines the cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **ListReconciler**: the ordered rows and their selection flags
//! - **NavigationModel**: cursor position and page size
//! - **UiModel**: preferences, toast, quit flag
//! - **AnimationModel**: the row animation currently in flight
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No terminal I/O: rendering and input live in the binary
//! - Pure accessors: Helper methods are side-effect free

pub mod animation;
pub mod list;
pub mod navigation;
pub mod types;
pub mod ui;

use std::time::Duration;

pub use animation::AnimationModel;
pub use list::{Item, ListReconciler};
pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Rows in display order
    pub list: ListReconciler,

    /// Cursor state
    pub navigation: NavigationModel,

    /// UI preferences and transient messages
    pub ui: UiModel,

    /// Row animation in flight
    pub animation: AnimationModel,
}

impl Model {
    /// Create initial model with `item_count` unselected rows
    pub fn new(item_count: u32, title: String, vim_mode: bool, animation: Duration) -> Self {
        let list = ListReconciler::new(item_count);
        Self {
            navigation: NavigationModel::new(list.len()),
            list,
            ui: UiModel::new(title, vim_mode),
            animation: AnimationModel::new(animation),
        }
    }

    /// Row under the cursor
    pub fn cursor_item(&self) -> Option<&Item> {
        self.navigation.cursor.and_then(|idx| self.list.get(idx))
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model() -> Model {
        Model::new(
            list::DEFAULT_ITEM_COUNT,
            ui::DEFAULT_TITLE.to_string(),
            false,
            Duration::from_millis(animation::DEFAULT_ANIMATION_MS),
        )
    }

    #[test]
    fn test_model_creation() {
        let model = test_model();
        assert_eq!(model.list.len(), 51);
        assert_eq!(model.navigation.cursor, Some(0));
        assert!(!model.ui.vim_mode);
        assert!(!model.animation.is_animating());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = test_model();
        let _cloned = model.clone();
    }

    #[test]
    fn test_cursor_item() {
        let mut model = test_model();
        assert_eq!(model.cursor_item().map(|i| i.id), Some(0));

        model.navigation.cursor = Some(17);
        assert_eq!(model.cursor_item().map(|i| i.id), Some(17));

        model.navigation.cursor = None;
        assert!(model.cursor_item().is_none());
    }
}
