//! Deck model
//!
//! The structured form of a presentation as produced by the generation
//! service, stored by the result cache and consumed by the compiler.

mod model;
pub mod sanitize;
pub mod schema;

#[cfg(test)]
mod tests;

pub use model::{Deck, Slide, SlideProperties};
pub use sanitize::{sanitize_deck, strip_leading_properties};
pub use schema::{DECK_SCHEMA_NAME, deck_schema};
