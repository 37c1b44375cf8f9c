/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("mixtable-debug.log");
    path
}

/// Prefix a log line with the local wall-clock time
pub fn timestamped(msg: &str) -> String {
    format!("[{}] {}", chrono::Local::now().format("%H:%M:%S%.3f"), msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_path_in_temp_dir() {
        let path = get_debug_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("mixtable-debug.log"));
    }

    #[test]
    fn test_timestamped_keeps_message() {
        let line = timestamped("shuffle applied");
        assert!(line.starts_with('['));
        assert!(line.ends_with("] shuffle applied"));
    }
}
