//! Animation Model
//!
//! Tracks the row animation started by the last list mutation. While an
//! animation is active the rows it touched are highlighted and queued
//! mutations wait, so the model never runs ahead of what is on screen.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::logic::reconcile::PositionDelta;

/// Default animation length
pub const DEFAULT_ANIMATION_MS: u64 = 350;

/// One in-flight row animation
#[derive(Clone, Debug)]
pub struct RowAnimation {
    /// Delta being animated
    pub delta: PositionDelta,

    /// Display indices to highlight
    pub rows: BTreeSet<usize>,

    /// Row the user activated (transient press highlight)
    pub focus_row: Option<usize>,

    pub started_at: Instant,
}

#[derive(Clone, Debug)]
pub struct AnimationModel {
    pub active: Option<RowAnimation>,
    pub duration: Duration,
}

impl AnimationModel {
    pub fn new(duration: Duration) -> Self {
        Self {
            active: None,
            duration,
        }
    }

    /// Begin animating a delta, replacing any previous animation
    pub fn start(
        &mut self,
        delta: PositionDelta,
        rows: BTreeSet<usize>,
        focus_row: Option<usize>,
        now: Instant,
    ) {
        self.active = Some(RowAnimation {
            delta,
            rows,
            focus_row,
            started_at: now,
        });
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Whether the active animation has run its full duration
    pub fn is_settled(&self, now: Instant) -> bool {
        match &self.active {
            Some(anim) => crate::logic::ui::animation_settled(anim.started_at, self.duration, now),
            None => true,
        }
    }

    /// Clear the active animation, returning it
    pub fn settle(&mut self) -> Option<RowAnimation> {
        self.active.take()
    }

    /// When the active animation settles
    pub fn deadline(&self) -> Option<Instant> {
        self.active.as_ref().map(|anim| anim.started_at + self.duration)
    }

    /// Whether a display row is part of the active animation
    pub fn highlights(&self, row: usize) -> bool {
        self.active
            .as_ref()
            .is_some_and(|anim| anim.rows.contains(&row))
    }

    /// Previous display index of the row that moved to `row`
    ///
    /// Only rows listed as moves in the delta report an origin; rows that
    /// merely shifted to make room do not.
    pub fn moved_from(&self, row: usize) -> Option<usize> {
        self.active
            .as_ref()
            .and_then(|anim| anim.delta.moves.iter().find(|m| m.to == row))
            .map(|m| m.from)
    }

    /// Whether a display row is the one the user activated
    pub fn is_focus(&self, row: usize) -> bool {
        self.active
            .as_ref()
            .is_some_and(|anim| anim.focus_row == Some(row))
    }
}
