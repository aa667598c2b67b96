//! Deck compiler
//!
//! Turns a [`Deck`] into the markdown dialect remark parses:
//!
//! ```text
//! name: intro            <- property block, non-default values only
//! class: center, middle
//!
//! # Slide body           <- content, verbatim
//!
//! ???
//! Speaker notes          <- only when notes are present
//!
//! --                     <- next visible slide is incremental
//!
//! ...
//!
//! ---                    <- next visible slide starts fresh
//! ```
//!
//! Excluded slides are dropped before separators are chosen, so they never
//! influence whether their neighbours are joined with `--` or `---`.
//! The deck stylesheet is not part of the markdown.


use crate::deck::{Deck, Slide, SlideProperties};
use std::fmt::Write;

const NOTES_MARKER: &str = "???";
const INCREMENTAL_SEPARATOR: &str = "--";
const SLIDE_SEPARATOR: &str = "---";

/// Compile a deck into remark markdown.
///
/// Pure and deterministic. The deck must hold at least one slide; an empty
/// deck is a caller bug and trips a debug assertion.
pub fn compile(deck: &Deck) -> String {
    debug_assert!(
        !deck.slides.is_empty(),
        "compile called with an empty deck; validate the deck first"
    );

    let mut markdown = String::new();
    let mut visible = deck.visible_slides().peekable();

    while let Some(slide) = visible.next() {
        write_slide(&mut markdown, slide);

        if let Some(next) = visible.peek() {
            let separator = if next.incremental_from_previous {
                INCREMENTAL_SEPARATOR
            } else {
                SLIDE_SEPARATOR
            };
            let _ = write!(markdown, "\n{}\n\n", separator);
        }
    }

    markdown
}

fn write_slide(out: &mut String, slide: &Slide) {
    write_properties(out, &slide.properties);

    let _ = write!(out, "\n{}\n", slide.content);

    if let Some(notes) = set(&slide.notes) {
        let _ = write!(out, "\n{}\n{}\n", NOTES_MARKER, notes);
    }
}

/// Property lines in remark's fixed order, defaults omitted
fn write_properties(out: &mut String, properties: &SlideProperties) {
    if let Some(name) = set(&properties.name) {
        let _ = writeln!(out, "name: {}", name);
    }

    if !properties.classes.is_empty() {
        let _ = writeln!(out, "class: {}", properties.classes.join(", "));
    }

    if let Some(url) = set(&properties.background_image_url) {
        let _ = writeln!(out, "background-image: url({})", url);
    }

    if !properties.count {
        out.push_str("count: false\n");
    }

    if properties.layout {
        out.push_str("layout: true\n");
    }

    if let Some(template) = set(&properties.template) {
        let _ = writeln!(out, "template: {}", template);
    }
}

/// An empty string counts as unset
fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Number of property lines a slide will produce
pub fn property_line_count(properties: &SlideProperties) -> usize {
    let mut block = String::new();
    write_properties(&mut block, properties);
    block.lines().count()
}
