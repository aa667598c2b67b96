//! Rate limiting for deck generation
//!
//! Generation is externally billed, so every identity gets a fixed number of
//! admissions per rolling window. The same limiter type backs both sides of
//! the boundary: an advisory instance on the caller side for quota display,
//! and an authoritative instance on the service side that actually rejects.

mod clock;
mod limiter;
mod types;


pub use clock::{Clock, ManualClock, SystemClock};
pub use limiter::SlidingWindowRateLimiter;
pub use types::{LimiterAuthority, RateLimitConfig};
