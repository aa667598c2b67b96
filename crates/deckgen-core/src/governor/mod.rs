//! Request governance
//!
//! [`RequestGovernor`] is the caller: result cache first, then the advisory
//! limiter. [`DeckService`] is the service: authoritative limiter, input
//! validation and moderation, then the generator.

mod request_governor;
mod service;


pub use request_governor::{
    DEFAULT_CLIENT_ADDRESS, DEFAULT_SESSION_ID, DeckSource, GovernedDeck, RequestGovernor,
};
pub use service::{DeckService, GenerationResponse};
