//! Content cleanup applied before compiling.
//!
//! Generated slide bodies sometimes repeat the property syntax (`class: center`)
//! that the compiler already writes from [`SlideProperties`](super::SlideProperties).
//! remark only reads properties from the first lines of a slide, so a duplicated
//! line would either override the real properties or leak into the rendered text.

use super::model::{Deck, Slide};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// A remark property line, e.g. `class: center, middle`
static PROPERTY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(name|class|background-image|count|layout|template|exclude):.*$").unwrap()
});

/// Strip leading property lines and leading blank lines from a slide body.
///
/// Everything from the first ordinary line on is kept byte-for-byte.
pub fn strip_leading_properties(content: &str) -> Cow<'_, str> {
    let mut rest = content;
    loop {
        let (line, remainder) = match rest.find('\n') {
            Some(idx) => (&rest[..idx], &rest[idx + 1..]),
            None => (rest, ""),
        };
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.trim().is_empty() && !rest.is_empty() {
            rest = remainder;
        } else if PROPERTY_LINE.is_match(line) {
            rest = remainder;
        } else {
            break;
        }
    }

    if rest.len() == content.len() {
        Cow::Borrowed(content)
    } else {
        Cow::Owned(rest.to_string())
    }
}

/// Return a copy of the deck with every slide body cleaned
pub fn sanitize_deck(deck: &Deck) -> Deck {
    Deck {
        css: deck.css.clone(),
        slides: deck.slides.iter().map(sanitize_slide).collect(),
    }
}

fn sanitize_slide(slide: &Slide) -> Slide {
    Slide {
        content: strip_leading_properties(&slide.content).into_owned(),
        ..slide.clone()
    }
}
