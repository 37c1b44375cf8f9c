//! List Model
//!
//! The ordered rows shown on screen and the two operations that reorder them.
//! Every operation returns a `PositionDelta` so the view can animate the
//! change instead of redrawing the whole list.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::logic::errors::ReconcileError;
use crate::logic::reconcile::{diff_positions, PositionDelta, RowMove, RowReload};

/// Number of rows created at startup
pub const DEFAULT_ITEM_COUNT: u32 = 51;

/// A single row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Stable identity, unchanged across reorders
    pub id: u32,

    /// Text shown in the row
    pub title: String,

    /// Whether the row shows a checkmark
    pub selected: bool,
}

impl Item {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            title: id.to_string(),
            selected: false,
        }
    }
}

/// Ordered rows, index order = display order
///
/// Ids are created once and are always a permutation of `0..count`.
/// Items are never inserted or removed after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListReconciler {
    items: Vec<Item>,
}

impl ListReconciler {
    /// Create `count` unselected rows with ids and titles `0..count`
    pub fn new(count: u32) -> Self {
        Self {
            items: (0..count).map(Item::new).collect(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Row at a display index
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Ids in display order
    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Display index of an id
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.selected).count()
    }

    /// Shuffle with the thread-local RNG
    pub fn shuffle(&mut self) -> PositionDelta {
        self.shuffle_with(&mut rand::rng())
    }

    /// Reorder every row into a uniformly random permutation
    ///
    /// The delta lists one move per row whose index changed. Selection flags
    /// are untouched, so no reloads are reported.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PositionDelta {
        let before = self.ids();
        self.items.shuffle(rng);

        PositionDelta {
            moves: diff_positions(&before, &self.ids()),
            reloads: Vec::new(),
        }
    }

    /// Flip a row's selected flag
    ///
    /// A row that becomes selected moves to index 0 and every row above it
    /// shifts down by one, keeping its relative order. A row that becomes
    /// deselected stays where it is. Only the toggled row's move is listed in
    /// the delta; the shifts it causes are implied.
    ///
    /// Returns `ReconcileError::NotFound` without touching the list when the
    /// id is absent.
    pub fn toggle_selection(&mut self, id: u32) -> Result<PositionDelta, ReconcileError> {
        let from = self.position_of(id).ok_or(ReconcileError::NotFound(id))?;

        let item = &mut self.items[from];
        item.selected = !item.selected;
        let selected = item.selected;

        let mut delta = PositionDelta::default();
        let index = if selected && from > 0 {
            self.items[..=from].rotate_right(1);
            delta.moves.push(RowMove { id, from, to: 0 });
            0
        } else {
            from
        };

        delta.reloads.push(RowReload { id, index, selected });
        Ok(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_rows() {
        let list = ListReconciler::new(DEFAULT_ITEM_COUNT);
        assert_eq!(list.len(), 51);
        assert_eq!(list.ids(), (0..51).collect::<Vec<_>>());
        assert_eq!(list.get(50).map(|i| i.title.as_str()), Some("50"));
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn test_toggle_moves_to_front() {
        let mut list = ListReconciler::new(4);
        let delta = list.toggle_selection(3).unwrap();

        assert_eq!(list.ids(), vec![3, 0, 1, 2]);
        assert_eq!(delta.moves, vec![RowMove { id: 3, from: 3, to: 0 }]);
        assert_eq!(delta.reloads, vec![RowReload { id: 3, index: 0, selected: true }]);
    }

    #[test]
    fn test_toggle_first_row_only_reloads() {
        let mut list = ListReconciler::new(3);
        let delta = list.toggle_selection(0).unwrap();

        assert_eq!(list.ids(), vec![0, 1, 2]);
        assert!(delta.moves.is_empty());
        assert_eq!(delta.reloads, vec![RowReload { id: 0, index: 0, selected: true }]);
    }

    #[test]
    fn test_deselect_stays_in_place() {
        let mut list = ListReconciler::new(3);
        list.toggle_selection(1).unwrap();
        list.toggle_selection(2).unwrap();
        assert_eq!(list.ids(), vec![2, 1, 0]);

        let delta = list.toggle_selection(1).unwrap();
        assert_eq!(list.ids(), vec![2, 1, 0]);
        assert!(delta.moves.is_empty());
        assert_eq!(delta.reloads, vec![RowReload { id: 1, index: 1, selected: false }]);
    }

    #[test]
    fn test_toggle_missing_id() {
        let mut list = ListReconciler::new(3);
        let before = list.clone();

        assert_eq!(list.toggle_selection(99), Err(ReconcileError::NotFound(99)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_shuffle_keeps_selection_flags() {
        let mut list = ListReconciler::new(10);
        list.toggle_selection(4).unwrap();
        list.toggle_selection(7).unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let delta = list.shuffle_with(&mut rng);

        assert!(delta.reloads.is_empty());
        assert_eq!(list.selected_count(), 2);
        let selected: Vec<u32> = list
            .items()
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.id)
            .collect();
        assert!(selected.contains(&4) && selected.contains(&7));
    }

    #[test]
    fn test_shuffle_empty_list() {
        let mut list = ListReconciler::new(0);
        let delta = list.shuffle();
        assert!(delta.is_empty());
        assert!(list.is_empty());
    }
}
