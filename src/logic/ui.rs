//! UI timing logic
//!
//! Pure functions deciding when transient UI state expires.

use std::time::{Duration, Instant};

/// Check whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use mixtable::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(200, 1500));
/// assert!(should_dismiss_toast(1500, 1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128, toast_ms: u64) -> bool {
    elapsed_ms >= u128::from(toast_ms)
}

/// Check whether an animation started at `started_at` has settled by `now`
pub fn animation_settled(started_at: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(started_at) >= duration
}

/// Pick the earliest of two optional deadlines
pub fn earliest_deadline(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_not_dismissed_early() {
        assert!(!should_dismiss_toast(0, 1500));
        assert!(!should_dismiss_toast(1499, 1500));
    }

    #[test]
    fn test_toast_zero_duration_dismisses_immediately() {
        assert!(should_dismiss_toast(0, 0));
    }

    #[test]
    fn test_animation_settled() {
        let start = Instant::now();
        let duration = Duration::from_millis(300);
        assert!(!animation_settled(start, duration, start));
        assert!(!animation_settled(start, duration, start + Duration::from_millis(299)));
        assert!(animation_settled(start, duration, start + duration));
    }

    #[test]
    fn test_animation_settled_with_now_before_start() {
        let start = Instant::now() + Duration::from_secs(1);
        assert!(!animation_settled(start, Duration::from_millis(10), Instant::now()));
    }

    #[test]
    fn test_earliest_deadline() {
        let now = Instant::now();
        let later = now + Duration::from_millis(5);
        assert_eq!(earliest_deadline(Some(later), Some(now)), Some(now));
        assert_eq!(earliest_deadline(None, Some(later)), Some(later));
        assert_eq!(earliest_deadline(Some(now), None), Some(now));
        assert_eq!(earliest_deadline(None, None), None);
    }
}
