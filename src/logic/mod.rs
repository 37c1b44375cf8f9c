//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - errors: Reconciler error type and toast formatting
//! - navigation: Cursor movement with wrapping and paging
//! - reconcile: Position deltas between two orderings of the same rows
//! - ui: Toast expiry and other UI timing decisions

pub mod errors;
pub mod navigation;
pub mod reconcile;
pub mod ui;
