use thiserror::Error;

/// Errors raised by list operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The requested item id is not part of the current list
    #[error("item {0} not found in list")]
    NotFound(u32),
}

/// Format an error for the toast line.
///
/// The toast renderer switches to its error theme for messages
/// starting with `Error:`.
pub fn format_error_message(error: &ReconcileError) -> String {
    format!("Error: {}", error)
}
