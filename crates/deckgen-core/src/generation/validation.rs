//! Input validation applied before anything is sent upstream

use crate::error::{DeckError, DeckResult};

/// Default maximum input length in characters
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 2000;

/// Reject empty or oversized topic descriptions
pub fn validate_input(input: &str, max_length: usize) -> DeckResult<()> {
    if input.trim().is_empty() {
        return Err(DeckError::invalid_input(
            "Please describe the slides you want to generate",
        ));
    }

    let length = input.chars().count();
    if length > max_length {
        return Err(DeckError::invalid_input(format!(
            "Input is too long ({} characters, maximum {})",
            length, max_length
        )));
    }

    Ok(())
}
