//! Navigation Model
//!
//! Cursor position within the list and the visible page height used for
//! page moves.

/// Rows moved by PageUp/PageDown before the first render reports a height
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Cursor state
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Row under the cursor (None only for an empty list)
    pub cursor: Option<usize>,

    /// Rows visible in the list area, updated on every render
    pub page_size: usize,
}

impl NavigationModel {
    /// Create a navigation model with the cursor on the first row
    pub fn new(list_len: usize) -> Self {
        Self {
            cursor: crate::logic::navigation::first_selection(list_len),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
