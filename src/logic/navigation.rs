//! Cursor navigation logic
//!
//! Pure functions for calculating the cursor index. Single steps wrap around
//! the ends of the list; page and jump moves clamp.

/// Calculate the next cursor index with wrapping
///
/// Advances the cursor to the next row. If at the end, wraps around to the
/// beginning. If no row is under the cursor, selects the first row.
///
/// # Arguments
/// * `current` - Current cursor index (None if no cursor)
/// * `list_len` - Total number of rows in the list
///
/// # Returns
/// * `Some(index)` - The next cursor index
/// * `None` - If the list is empty
///
/// # Examples
/// ```
/// use mixtable::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
///
/// // Wrapping at end
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous cursor index with wrapping
///
/// Moves the cursor to the previous row. If at the beginning, wraps around to
/// the end. If no row is under the cursor, selects the last row.
///
/// # Examples
/// ```
/// use mixtable::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
///
/// // Wrapping at beginning
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Move the cursor down by a page, stopping at the last row
pub fn page_down(current: Option<usize>, list_len: usize, page_size: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    let step = page_size.max(1);
    Some(current.map_or(0, |i| i.saturating_add(step)).min(list_len - 1))
}

/// Move the cursor up by a page, stopping at the first row
pub fn page_up(current: Option<usize>, list_len: usize, page_size: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    let step = page_size.max(1);
    Some(current.map_or(0, |i| i.min(list_len - 1).saturating_sub(step)))
}

/// First row of a non-empty list
pub fn first_selection(list_len: usize) -> Option<usize> {
    (list_len > 0).then_some(0)
}

/// Last row of a non-empty list
pub fn last_selection(list_len: usize) -> Option<usize> {
    list_len.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(5), 0), None);
    }

    #[test]
    fn test_next_selection_wrapping() {
        assert_eq!(next_selection(Some(50), 51), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0)); // Single row wraps to itself
    }

    #[test]
    fn test_prev_selection_wrapping() {
        assert_eq!(prev_selection(Some(0), 51), Some(50));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_prev_selection_out_of_bounds_clamps() {
        // Cursor index past the end clamps to the last row
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_page_down_clamps_at_end() {
        assert_eq!(page_down(Some(0), 51, 10), Some(10));
        assert_eq!(page_down(Some(45), 51, 10), Some(50));
        assert_eq!(page_down(None, 51, 10), Some(0));
        assert_eq!(page_down(Some(3), 0, 10), None);
    }

    #[test]
    fn test_page_up_clamps_at_start() {
        assert_eq!(page_up(Some(25), 51, 10), Some(15));
        assert_eq!(page_up(Some(4), 51, 10), Some(0));
        assert_eq!(page_up(None, 51, 10), Some(0));
    }

    #[test]
    fn test_zero_page_size_still_moves() {
        assert_eq!(page_down(Some(3), 10, 0), Some(4));
        assert_eq!(page_up(Some(3), 10, 0), Some(2));
    }

    #[test]
    fn test_first_and_last() {
        assert_eq!(first_selection(0), None);
        assert_eq!(last_selection(0), None);
        assert_eq!(first_selection(51), Some(0));
        assert_eq!(last_selection(51), Some(50));
    }
}
