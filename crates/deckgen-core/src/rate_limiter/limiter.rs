//! Sliding window rate limiter keyed by caller identity

use super::clock::{Clock, SystemClock};
use super::types::{LimiterAuthority, RateLimitConfig};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Per-identity sliding window rate limiter
///
/// Each identity keeps the timestamps of its admissions inside the current
/// window. An admission leaves the window exactly `window` after it was
/// recorded; rejected checks are not recorded.
#[derive(Debug)]
pub struct SlidingWindowRateLimiter {
    config: RateLimitConfig,
    authority: LimiterAuthority,
    clock: Arc<dyn Clock>,
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl SlidingWindowRateLimiter {
    /// Create a limiter using the system clock
    pub fn new(config: RateLimitConfig, authority: LimiterAuthority) -> Self {
        Self::with_clock(config, authority, Arc::new(SystemClock))
    }

    /// Caller-side limiter used for UI feedback
    pub fn advisory(config: RateLimitConfig) -> Self {
        Self::new(config, LimiterAuthority::Advisory)
    }

    /// Service-side limiter that gates generation
    pub fn authoritative(config: RateLimitConfig) -> Self {
        Self::new(config, LimiterAuthority::Authoritative)
    }

    /// Create a limiter with an explicit time source
    pub fn with_clock(
        config: RateLimitConfig,
        authority: LimiterAuthority,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            authority,
            clock,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    pub fn authority(&self) -> LimiterAuthority {
        self.authority
    }

    /// Admit a request for `identity` if quota is left, recording it.
    ///
    /// Returns false once the window's quota is exhausted.
    pub fn check_limit(&self, identity: &str) -> bool {
        if !self.config.enabled {
            return true;
        }

        let now = self.clock.now();
        let mut windows = self.windows.lock();
        let timestamps = windows.entry(identity.to_string()).or_default();
        prune(timestamps, now, self.config.window);

        if timestamps.len() < self.config.max_requests as usize {
            timestamps.push_back(now);
            debug!(
                "Rate limiter ({}): admitted {}, {} remaining",
                self.authority,
                identity,
                self.config.max_requests as usize - timestamps.len()
            );
            true
        } else {
            debug!(
                "Rate limiter ({}): rejected {}, window full",
                self.authority, identity
            );
            false
        }
    }

    /// Admissions left for `identity` in the current window
    pub fn remaining(&self, identity: &str) -> u32 {
        if !self.config.enabled {
            return self.config.max_requests;
        }

        let now = self.clock.now();
        let mut windows = self.windows.lock();
        let used = match windows.get_mut(identity) {
            Some(timestamps) => {
                prune(timestamps, now, self.config.window);
                timestamps.len()
            }
            None => 0,
        };

        let used = u32::try_from(used).unwrap_or(u32::MAX);
        self.config.max_requests.saturating_sub(used)
    }

    /// Time until the next admission for `identity` becomes possible.
    ///
    /// `None` when quota is available now.
    pub fn retry_after(&self, identity: &str) -> Option<Duration> {
        if !self.config.enabled {
            return None;
        }

        let now = self.clock.now();
        let mut windows = self.windows.lock();
        let timestamps = windows.get_mut(identity)?;
        prune(timestamps, now, self.config.window);

        if timestamps.len() < self.config.max_requests as usize {
            return None;
        }

        // A full window frees a slot when its oldest admission expires
        timestamps
            .front()
            .map(|oldest| self.config.window.saturating_sub(now.duration_since(*oldest)))
    }

    /// Drop identities whose windows have fully elapsed
    pub fn purge_idle(&self) {
        let now = self.clock.now();
        let window = self.config.window;
        self.windows.lock().retain(|_, timestamps| {
            prune(timestamps, now, window);
            !timestamps.is_empty()
        });
    }

    /// Number of identities currently tracked
    pub fn tracked_identities(&self) -> usize {
        self.windows.lock().len()
    }
}

/// Remove admissions that have left the window
fn prune(timestamps: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(front) = timestamps.front() {
        if now.duration_since(*front) >= window {
            timestamps.pop_front();
        } else {
            break;
        }
    }
}
