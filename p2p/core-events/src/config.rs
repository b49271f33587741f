//! Config for the relay notification queue.
use serde::{Deserialize, Serialize};

/// The default [`QueueConfig::capacity`].
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Config for `QueuedEvents`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Eq, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct QueueConfig {
    /// The maximum amount of relay notifications waiting to be handled.
    ///
    /// Once full, new notifications are dropped and logged.
    /// `0` is treated as `1`.
    ///
    /// Type         | Number
    /// Valid values | >= 0
    /// Examples     | 64, 1024, 4096
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl QueueConfig {
    /// Returns the channel capacity to use, never `0`.
    pub const fn channel_capacity(&self) -> usize {
        if self.capacity == 0 {
            1
        } else {
            self.capacity
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_toml() {
        let config: QueueConfig = toml::from_str("capacity = 64").unwrap();
        assert_eq!(config.capacity, 64);

        let config: QueueConfig = toml::from_str("").unwrap();
        assert_eq!(config, QueueConfig::default());

        assert!(toml::from_str::<QueueConfig>("size = 64").is_err());
    }

    #[test]
    fn zero_capacity() {
        let config = QueueConfig { capacity: 0 };
        assert_eq!(config.channel_capacity(), 1);
    }
}
