//! Shared model types

/// Vim multi-key command state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}
