//! Update function (Elm Architecture)
//!
//! Applies one `Intent` to the `Model`. List mutations start a row animation
//! built from the returned delta and keep the cursor on the row it was on.

use std::time::Instant;

use rand::Rng;

use crate::logic::errors::ReconcileError;
use crate::logic::navigation;
use crate::logic::reconcile::{rows_to_animate, PositionDelta};
use crate::messages::Intent;
use crate::model::Model;

/// Apply an intent to the model
///
/// Returns the delta of a list mutation so the caller can log or inspect it,
/// `None` for cursor moves and quit. A toggle of an unknown id fails with
/// `ReconcileError::NotFound` and leaves the model untouched.
pub fn update<R: Rng + ?Sized>(
    model: &mut Model,
    intent: Intent,
    rng: &mut R,
    now: Instant,
) -> Result<Option<PositionDelta>, ReconcileError> {
    let len = model.list.len();

    match intent {
        Intent::ToggleRequested(id) => {
            let before = model.list.ids();
            let cursor_id = model.cursor_item().map(|item| item.id);

            let delta = model.list.toggle_selection(id)?;
            let focus_row = delta.reloads.first().map(|reload| reload.index);
            finish_mutation(model, &before, cursor_id, &delta, focus_row, now);

            Ok(Some(delta))
        }
        Intent::ShuffleRequested => {
            if model.list.is_empty() {
                return Ok(None);
            }

            let before = model.list.ids();
            let cursor_id = model.cursor_item().map(|item| item.id);

            let delta = model.list.shuffle_with(rng);
            finish_mutation(model, &before, cursor_id, &delta, None, now);
            model.show_toast(format!(
                "Shuffled {} rows ({} moved)",
                model.list.len(),
                delta.moves.len()
            ));

            Ok(Some(delta))
        }
        Intent::CursorUp => {
            model.navigation.cursor = navigation::prev_selection(model.navigation.cursor, len);
            Ok(None)
        }
        Intent::CursorDown => {
            model.navigation.cursor = navigation::next_selection(model.navigation.cursor, len);
            Ok(None)
        }
        Intent::CursorFirst => {
            model.navigation.cursor = navigation::first_selection(len);
            Ok(None)
        }
        Intent::CursorLast => {
            model.navigation.cursor = navigation::last_selection(len);
            Ok(None)
        }
        Intent::PageUp => {
            model.navigation.cursor = navigation::page_up(
                model.navigation.cursor,
                len,
                model.navigation.page_size,
            );
            Ok(None)
        }
        Intent::PageDown => {
            model.navigation.cursor = navigation::page_down(
                model.navigation.cursor,
                len,
                model.navigation.page_size,
            );
            Ok(None)
        }
        Intent::Quit => {
            model.ui.should_quit = true;
            Ok(None)
        }
    }
}

/// Move the cursor after its row and start the row animation
fn finish_mutation(
    model: &mut Model,
    before: &[u32],
    cursor_id: Option<u32>,
    delta: &PositionDelta,
    focus_row: Option<usize>,
    now: Instant,
) {
    let after = model.list.ids();

    if let Some(idx) = cursor_id.and_then(|id| model.list.position_of(id)) {
        model.navigation.cursor = Some(idx);
    }

    let rows = rows_to_animate(before, &after, delta);
    model.animation.start(delta.clone(), rows, focus_row, now);
}
