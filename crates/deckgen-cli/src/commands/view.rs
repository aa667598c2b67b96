//! Present a cached deck in the browser

use crate::console::CliConsole;
use anyhow::{Result, bail};
use console::Term;
use deckgen_core::{DeckgenBuilder, DeckgenConfig, MountedPresentation};

pub async fn run(config: DeckgenConfig, index: usize) -> Result<()> {
    let console = CliConsole::new(true);
    let governor = DeckgenBuilder::new().with_config(config).build()?;

    let Some(governed) = governor.cached(index)? else {
        if index == 0 {
            bail!("No cached decks yet; run `deckgen generate \"<topic>\"` first");
        }
        bail!("No cached deck at position {}", index);
    };

    let dir = std::env::temp_dir().join("deckgen");
    let mounted = MountedPresentation::mount(&governed.presentation, &governed.input, &dir)?;

    if let Err(e) = webbrowser::open(&mounted.url()) {
        console.warn(&format!("Could not open a browser: {}", e));
    }
    console.success(&format!("Presenting {}", mounted.path().display()));
    console.field("Slides", governed.deck.visible_slide_count());
    println!("Press Enter to close the presentation");

    // The page is removed once `mounted` goes out of scope
    let term = Term::stdout();
    tokio::task::block_in_place(|| term.read_line())?;
    drop(mounted);
    Ok(())
}
