//! Row reconciliation logic
//!
//! Pure functions describing how rows changed between two orderings of the
//! same item ids. The view uses the resulting delta to animate only the rows
//! that changed instead of redrawing the whole list.
//!
//! Move semantics follow batch table updates: `from` is an index in the old
//! ordering, `to` an index in the new one. Rows that are not listed keep their
//! relative order and fill the remaining slots.

use std::collections::{BTreeSet, HashSet};

/// An item whose display index changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMove {
    pub id: u32,
    pub from: usize,
    pub to: usize,
}

/// A row whose contents (checkmark) must be redrawn in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowReload {
    pub id: u32,
    pub index: usize,
    pub selected: bool,
}

/// Everything the view needs to bring its rows in sync after one operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionDelta {
    pub moves: Vec<RowMove>,
    pub reloads: Vec<RowReload>,
}

impl PositionDelta {
    /// True when neither positions nor row contents changed
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.reloads.is_empty()
    }
}

/// List every id whose index differs between two orderings of the same ids
///
/// Moves are reported in `after` order.
///
/// # Examples
/// ```
/// use mixtable::logic::reconcile::{diff_positions, RowMove};
///
/// assert!(diff_positions(&[0, 1, 2], &[0, 1, 2]).is_empty());
///
/// let moves = diff_positions(&[0, 1, 2], &[2, 0, 1]);
/// assert_eq!(moves[0], RowMove { id: 2, from: 2, to: 0 });
/// assert_eq!(moves.len(), 3);
/// ```
pub fn diff_positions(before: &[u32], after: &[u32]) -> Vec<RowMove> {
    after
        .iter()
        .enumerate()
        .filter_map(|(to, &id)| {
            let from = before.iter().position(|&b| b == id)?;
            (from != to).then_some(RowMove { id, from, to })
        })
        .collect()
}

/// Replay a delta's moves on the ids currently displayed
///
/// Listed ids land on their `to` index; every other id keeps its relative
/// order and fills the remaining slots front to back.
///
/// # Examples
/// ```
/// use mixtable::logic::reconcile::{apply_delta, PositionDelta, RowMove};
///
/// let delta = PositionDelta {
///     moves: vec![RowMove { id: 2, from: 2, to: 0 }],
///     reloads: vec![],
/// };
/// assert_eq!(apply_delta(&[0, 1, 2], &delta), vec![2, 0, 1]);
/// ```
pub fn apply_delta(displayed: &[u32], delta: &PositionDelta) -> Vec<u32> {
    let moved: HashSet<u32> = delta.moves.iter().map(|m| m.id).collect();

    let mut slots: Vec<Option<u32>> = vec![None; displayed.len()];
    for m in &delta.moves {
        if let Some(slot) = slots.get_mut(m.to) {
            *slot = Some(m.id);
        }
    }

    let mut rest = displayed.iter().copied().filter(|id| !moved.contains(id));
    slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| rest.next()))
        .collect()
}

/// Display indices that need an animated redraw after an operation
///
/// Includes every index now showing a different id (moved rows and the rows
/// they shifted) plus every reloaded row.
pub fn rows_to_animate(before: &[u32], after: &[u32], delta: &PositionDelta) -> BTreeSet<usize> {
    let mut rows: BTreeSet<usize> = before
        .iter()
        .zip(after)
        .enumerate()
        .filter(|(_, (b, a))| b != a)
        .map(|(idx, _)| idx)
        .collect();

    rows.extend(delta.reloads.iter().map(|r| r.index));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_positions_identical() {
        assert!(diff_positions(&[3, 1, 2], &[3, 1, 2]).is_empty());
    }

    #[test]
    fn test_diff_positions_reports_only_changed() {
        let moves = diff_positions(&[0, 1, 2, 3], &[1, 0, 2, 3]);
        assert_eq!(
            moves,
            vec![
                RowMove { id: 1, from: 1, to: 0 },
                RowMove { id: 0, from: 0, to: 1 },
            ]
        );
    }

    #[test]
    fn test_apply_delta_full_listing() {
        let before = [0, 1, 2, 3, 4];
        let after = [4, 1, 0, 3, 2];
        let delta = PositionDelta {
            moves: diff_positions(&before, &after),
            reloads: vec![],
        };
        assert_eq!(apply_delta(&before, &delta), after.to_vec());
    }

    #[test]
    fn test_apply_delta_single_move_shifts_others() {
        let delta = PositionDelta {
            moves: vec![RowMove { id: 3, from: 3, to: 0 }],
            reloads: vec![RowReload { id: 3, index: 0, selected: true }],
        };
        assert_eq!(apply_delta(&[0, 1, 2, 3, 4], &delta), vec![3, 0, 1, 2, 4]);
    }

    #[test]
    fn test_apply_empty_delta_is_identity() {
        assert_eq!(apply_delta(&[5, 6, 7], &PositionDelta::default()), vec![5, 6, 7]);
    }

    #[test]
    fn test_rows_to_animate_move_to_front() {
        let delta = PositionDelta {
            moves: vec![RowMove { id: 2, from: 2, to: 0 }],
            reloads: vec![RowReload { id: 2, index: 0, selected: true }],
        };
        let rows = rows_to_animate(&[0, 1, 2, 3], &[2, 0, 1, 3], &delta);
        assert_eq!(rows.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_rows_to_animate_reload_only() {
        let delta = PositionDelta {
            moves: vec![],
            reloads: vec![RowReload { id: 1, index: 1, selected: false }],
        };
        let rows = rows_to_animate(&[0, 1, 2], &[0, 1, 2], &delta);
        assert_eq!(rows.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_is_empty() {
        let delta = PositionDelta {
            moves: vec![RowMove { id: 9, from: 4, to: 0 }],
            reloads: vec![],
        };
        assert!(!delta.is_empty());
        assert!(PositionDelta::default().is_empty());
    }
}
