//! Renderer boundary
//!
//! remark reads its markdown from a `<textarea id="source">` element and the
//! deck stylesheet goes into a regular `<style>` element. A
//! [`MountedPresentation`] owns the host page on disk for as long as the
//! presentation is being viewed and removes it when dropped.

use crate::compiler::compile;
use crate::deck::{Deck, sanitize_deck};
use crate::error::{DeckError, DeckResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// remark build loaded by the host page
pub const REMARK_SCRIPT_URL: &str = "https://remarkjs.com/downloads/remark-latest.min.js";

/// The compiler output pair handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub markdown: String,
    pub css: String,
}

impl Presentation {
    /// Clean slide bodies and compile the deck
    pub fn from_deck(deck: &Deck) -> DeckResult<Self> {
        deck.validate()?;
        let clean = sanitize_deck(deck);
        Ok(Self {
            markdown: compile(&clean),
            css: clean.css,
        })
    }

    /// Standalone HTML host page for the presentation
    pub fn to_html(&self, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
{css}
    </style>
  </head>
  <body>
    <textarea id="source" style="display: none">
{markdown}</textarea>
    <script src="{script}"></script>
    <script>
      var slideshow = remark.create();
    </script>
  </body>
</html>
"#,
            title = html_escape::encode_text(title),
            css = escape_style(&self.css),
            markdown = html_escape::encode_text(&self.markdown),
            script = REMARK_SCRIPT_URL,
        )
    }
}

/// Keep the stylesheet from closing its own `<style>` element
fn escape_style(css: &str) -> String {
    css.replace("</style", "<\\/style")
}

/// A presentation mounted as an HTML page on disk.
///
/// The page exists for the lifetime of this value.
#[derive(Debug)]
pub struct MountedPresentation {
    path: PathBuf,
}

impl MountedPresentation {
    /// Write the host page into `dir`
    pub fn mount(presentation: &Presentation, title: &str, dir: &Path) -> DeckResult<Self> {
        fs::create_dir_all(dir).map_err(|e| {
            DeckError::Io(format!(
                "Failed to create presentation directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let file_name = format!(
            "deck-{}.html",
            chrono::Utc::now().format("%Y%m%d%H%M%S%3f")
        );
        let path = dir.join(file_name);
        fs::write(&path, presentation.to_html(title))?;

        debug!("Mounted presentation at {}", path.display());
        Ok(Self { path })
    }

    /// Location of the host page
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `file://` URL of the host page
    pub fn url(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

impl Drop for MountedPresentation {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            debug!(
                "Failed to remove presentation page {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Slide, SlideProperties};
    use tempfile::TempDir;

    fn sample_deck() -> Deck {
        Deck::new(
            ".poodley { color: #1e88e5; }",
            vec![
                Slide::new("class: center, middle\n\n# Meet <the> Spoodle")
                    .with_properties(
                        SlideProperties::default()
                            .with_class("center")
                            .with_class("middle"),
                    ),
                Slide::new("- more").incremental(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_deck_strips_duplicated_properties() {
        let presentation = Presentation::from_deck(&sample_deck()).unwrap();
        assert_eq!(presentation.markdown.matches("class:").count(), 1);
        assert!(
            presentation
                .markdown
                .starts_with("class: center, middle\n\n# Meet <the> Spoodle\n")
        );
        assert_eq!(presentation.css, ".poodley { color: #1e88e5; }");
    }

    #[test]
    fn test_from_deck_rejects_empty_deck() {
        let deck = Deck {
            css: String::new(),
            slides: Vec::new(),
        };
        assert!(Presentation::from_deck(&deck).is_err());
    }

    #[test]
    fn test_html_embeds_markdown_and_css() {
        let presentation = Presentation::from_deck(&sample_deck()).unwrap();
        let html = presentation.to_html("Spoodles");

        assert!(html.contains(r#"<textarea id="source""#));
        assert!(html.contains("# Meet &lt;the&gt; Spoodle"));
        assert!(html.contains(".poodley { color: #1e88e5; }"));
        assert!(html.contains(REMARK_SCRIPT_URL));
        assert!(html.contains("<title>Spoodles</title>"));
    }

    #[test]
    fn test_css_cannot_close_style_element() {
        let presentation = Presentation {
            markdown: "# A".to_string(),
            css: "a{}</style><script>alert(1)</script>".to_string(),
        };
        let html = presentation.to_html("x");
        assert!(!html.contains("</style><script>"));
    }

    #[test]
    fn test_mounted_page_is_removed_on_drop() {
        let dir = TempDir::new().unwrap();
        let presentation = Presentation::from_deck(&sample_deck()).unwrap();

        let path = {
            let mounted = MountedPresentation::mount(&presentation, "t", dir.path()).unwrap();
            assert!(mounted.path().exists());
            assert!(mounted.url().starts_with("file://"));
            mounted.path().to_path_buf()
        };

        assert!(!path.exists());
    }
}
