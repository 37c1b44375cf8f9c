//! Mixer-Table TUI Library
//!
//! Exposes the list model, pure logic and the update function for testing.
//! Terminal setup, config loading and rendering live in the binary.

pub mod logic;
pub mod messages;
pub mod model;
pub mod update;
