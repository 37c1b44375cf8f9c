//! Event Handlers
//!
//! - keyboard: Turns key presses into `Intent` values
//!
//! Handlers are pure: they read the model and return an intent. The event
//! loop in main.rs decides when the intent is applied.

pub mod keyboard;

pub use keyboard::handle_key;
