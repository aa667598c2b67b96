//! Type definitions for rate limiting

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Sliding-window quota configuration
///
/// At most `max_requests` admissions per identity within any rolling
/// `window`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Admissions allowed per window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    /// Length of the rolling window
    #[serde(default = "default_window", with = "duration_serde")]
    pub window: Duration,

    /// Whether rate limiting is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_max_requests() -> u32 {
    15
}
fn default_window() -> Duration {
    Duration::from_secs(60 * 60)
}
fn default_enabled() -> bool {
    true
}

/// Serde support for Duration as whole seconds
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window: default_window(),
            enabled: true,
        }
    }
}

impl RateLimitConfig {
    /// Create a new configuration
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            enabled: true,
        }
    }

    /// Quota per minute
    pub fn per_minute(max_requests: u32) -> Self {
        Self::new(max_requests, Duration::from_secs(60))
    }

    /// Quota per hour
    pub fn per_hour(max_requests: u32) -> Self {
        Self::new(max_requests, Duration::from_secs(60 * 60))
    }

    /// Create a disabled rate limiter configuration
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

/// Which side of the boundary a limiter runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimiterAuthority {
    /// Caller-side, UI feedback only; can be bypassed by the caller
    Advisory,
    /// Service-side, the only limiter that blocks generation
    Authoritative,
}

impl fmt::Display for LimiterAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advisory => write!(f, "advisory"),
            Self::Authoritative => write!(f, "authoritative"),
        }
    }
}
