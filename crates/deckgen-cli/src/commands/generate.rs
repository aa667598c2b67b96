//! Governed deck generation

use crate::console::CliConsole;
use anyhow::{Context, Result};
use deckgen_core::{DeckSource, DeckgenBuilder, DeckgenConfig};
use std::fs;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "deck.html";

pub async fn run(
    config: DeckgenConfig,
    verbose: bool,
    topic: &str,
    out: Option<PathBuf>,
    markdown: bool,
) -> Result<()> {
    let console = CliConsole::new(verbose);
    let governor = DeckgenBuilder::new().with_config(config).build()?;

    let spinner = console.spinner("Generating slides");
    let result = governor.request(topic).await;
    spinner.finish_and_clear();

    let governed = match result {
        Ok(governed) => governed,
        Err(e) => {
            if e.is_transient() {
                console.warn("The same request may succeed later.");
            }
            console.info(&format!("Remaining requests: {}", governor.remaining()));
            return Err(e.into());
        }
    };

    if markdown {
        print!("{}", governed.presentation.markdown);
        return Ok(());
    }

    match governed.source {
        DeckSource::Cache => console.success("Using cached deck"),
        DeckSource::Generated => console.success(&format!(
            "Generated {} slides",
            governed.deck.visible_slide_count()
        )),
    }
    console.field("Remaining requests (this run)", governed.remaining_requests);

    let path = out.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    fs::write(&path, governed.presentation.to_html(topic))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    console.success(&format!("Wrote {}", path.display()));
    Ok(())
}
