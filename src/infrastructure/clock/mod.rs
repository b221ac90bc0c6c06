//! Timestamp sources for the `__created_at__` system column

use chrono::Local;

/// Timestamp format used by `SystemClock`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A source of timestamp strings
pub trait Clock: Send + Sync {
    /// Returns the current time as a string
    fn now(&self) -> String;
}

/// Local wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// A clock frozen at one timestamp
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: String,
}

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.timestamp.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_system_clock_format() {
        let now = SystemClock::new().now();
        assert_eq!(now.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&now, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new("2024-01-01 00:00:00");
        assert_eq!(clock.now(), "2024-01-01 00:00:00");
        assert_eq!(clock.now(), clock.now());
    }
}
