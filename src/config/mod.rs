//! # Configuration
//!
//! Typed configuration for the demo. Every number the program depends on lives here as a
//! named constant, and the two runtime values ([`Config`] and [`Limits`]) derive
//! `Default` so `main` never touches a bare literal.
//!
//! `Config` is `Clone` rather than shared: each worker receives its own snapshot, so a
//! change in one copy is never observed by another.

use serde::{Deserialize, Serialize};

/// Default transport port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default host name.
pub const DEFAULT_HOST: &str = "localhost";

/// Iterations each worker performs.
pub const DEFAULT_ITERATIONS: usize = 10;

/// Number of concurrent workers.
pub const DEFAULT_WORKER_COUNT: usize = 2;

/// Length of the demo buffer.
pub const DEFAULT_BUFFER_LEN: usize = 10;

/// Counter value above which a high-load warning is emitted.
pub const HIGH_LOAD_THRESHOLD: u64 = 50;

/// Sum above which the total calculator reports a large total.
pub const LARGE_TOTAL_THRESHOLD: i32 = 100;

/// Connection settings handed to every worker by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub host_name: String,
    pub use_ssl: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host_name: DEFAULT_HOST.to_string(),
            use_ssl: true,
        }
    }
}

/// Sizes and thresholds that shape a demo run.
///
/// The defaults reproduce the classic console output; tests shrink or raise them to
/// exercise edge cases without touching global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub iterations: usize,
    pub worker_count: usize,
    pub buffer_len: usize,
    pub high_load_threshold: u64,
    pub large_total_threshold: i32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            worker_count: DEFAULT_WORKER_COUNT,
            buffer_len: DEFAULT_BUFFER_LEN,
            high_load_threshold: HIGH_LOAD_THRESHOLD,
            large_total_threshold: LARGE_TOTAL_THRESHOLD,
        }
    }
}

impl Limits {
    /// Counter value every worker together should reach.
    pub fn expected_final_count(&self) -> u64 {
        (self.iterations as u64).saturating_mul(self.worker_count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_demo_values() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host_name, "localhost");
        assert!(config.use_ssl);
    }

    #[test]
    fn test_config_copies_are_independent() {
        let original = Config::default();
        let mut first = original.clone();
        let second = original.clone();

        first.host_name = "example.org".to_string();

        assert_eq!(second.host_name, "localhost");
        assert_eq!(original.host_name, "localhost");
        assert_ne!(first, second);
    }

    #[test]
    fn test_expected_final_count() {
        assert_eq!(Limits::default().expected_final_count(), 20);

        let limits = Limits {
            iterations: 3,
            worker_count: 4,
            ..Limits::default()
        };
        assert_eq!(limits.expected_final_count(), 12);
    }
}
