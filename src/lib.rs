//! deckgen
//!
//! Turn a topic description into a remark.js slide deck. This package
//! re-exports [`deckgen_core`]; the `deckgen` binary lives in
//! `crates/deckgen-cli`.

pub use deckgen_core::*;
