//! Cache inspection commands

use super::one_line;
use crate::console::CliConsole;
use anyhow::{Result, bail};
use colored::*;
use deckgen_core::{DeckgenBuilder, DeckgenConfig, Presentation};

pub fn list(config: &DeckgenConfig) -> Result<()> {
    let console = CliConsole::new(true);
    let cache = DeckgenBuilder::build_cache(config);

    console.print_header(&format!("Cached decks ({}/{})", cache.len(), cache.capacity()));
    if cache.is_empty() {
        console.info("No cached decks");
        return Ok(());
    }

    for (index, entry) in cache.list().iter().enumerate() {
        let summary = entry.summary();
        println!(
            "{:>3}  {}  {:>3} slides  {}",
            index.to_string().bold(),
            summary
                .inserted_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .dimmed(),
            summary.visible_slides,
            one_line(&summary.input, 60)
        );
    }
    Ok(())
}

pub fn show(config: &DeckgenConfig, index: usize) -> Result<()> {
    let cache = DeckgenBuilder::build_cache(config);
    let Some(entry) = cache.list().into_iter().nth(index) else {
        bail!("No cached deck at position {}", index);
    };

    let presentation = Presentation::from_deck(&entry.deck)?;
    print!("{}", presentation.markdown);
    Ok(())
}

pub fn remove(config: &DeckgenConfig, topic: &str) -> Result<()> {
    let console = CliConsole::new(true);
    let cache = DeckgenBuilder::build_cache(config);

    if cache.get(topic).is_none() {
        console.warn("No cached deck for that exact topic");
        return Ok(());
    }
    cache.remove(topic);
    console.success("Removed cached deck");
    Ok(())
}

pub fn clear(config: &DeckgenConfig) -> Result<()> {
    let console = CliConsole::new(true);
    let cache = DeckgenBuilder::build_cache(config);
    let count = cache.len();
    cache.clear();
    console.success(&format!("Cleared {} cached decks", count));
    Ok(())
}
