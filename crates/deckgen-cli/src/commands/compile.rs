//! Offline compilation of deck files

use anyhow::{Context, Result};
use deckgen_core::{Deck, Presentation};
use std::fs;
use std::path::Path;

/// Compile `deck_path`; an `.html` output gets the full host page
pub fn run(deck_path: &Path, out: Option<&Path>) -> Result<()> {
    let json = fs::read_to_string(deck_path)
        .with_context(|| format!("Failed to read {}", deck_path.display()))?;
    let deck = Deck::from_json(&json)?;
    let presentation = Presentation::from_deck(&deck)?;

    match out {
        Some(path) if path.extension().is_some_and(|ext| ext == "html") => {
            let title = deck_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "deck".to_string());
            fs::write(path, presentation.to_html(&title))
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        Some(path) => fs::write(path, &presentation.markdown)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", presentation.markdown),
    }
    Ok(())
}
