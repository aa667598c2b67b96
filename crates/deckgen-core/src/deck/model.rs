//! Typed deck model shared by the generator, the cache and the compiler

use crate::error::{DeckError, DeckResult};
use serde::{Deserialize, Serialize};

/// Per-slide properties that become the leading `key: value` lines of a slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SlideProperties {
    /// `name:` identifier for linking and templates
    #[serde(default)]
    pub name: Option<String>,
    /// `class:` tokens, emitted comma-separated in this order
    #[serde(default)]
    pub classes: Vec<String>,
    /// `layout: true` makes the slide a template excluded from playback
    #[serde(default)]
    pub layout: bool,
    /// `template:` name of another slide to inherit from
    #[serde(default)]
    pub template: Option<String>,
    /// `count: false` hides the slide from the visible counter
    #[serde(default = "default_count")]
    pub count: bool,
    /// Fully suppressed slide
    #[serde(default)]
    pub exclude: bool,
    /// Rendered as `background-image: url(...)`
    #[serde(default)]
    pub background_image_url: Option<String>,
}

fn default_count() -> bool {
    true
}

impl Default for SlideProperties {
    fn default() -> Self {
        Self {
            name: None,
            classes: Vec::new(),
            layout: false,
            template: None,
            count: true,
            exclude: false,
            background_image_url: None,
        }
    }
}

impl SlideProperties {
    /// True when no property deviates from its default
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_background_image(mut self, url: impl Into<String>) -> Self {
        self.background_image_url = Some(url.into());
        self
    }

    pub fn layout(mut self) -> Self {
        self.layout = true;
        self
    }

    pub fn uncounted(mut self) -> Self {
        self.count = false;
        self
    }

    pub fn excluded(mut self) -> Self {
        self.exclude = true;
        self
    }
}

/// A single slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Slide {
    /// Markdown body shown on the slide
    #[serde(default)]
    pub content: String,
    /// Speaker notes, rendered after a `???` marker
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub properties: SlideProperties,
    /// Continue the previous slide with `--` instead of starting a new one
    #[serde(default)]
    pub incremental_from_previous: bool,
}

impl Slide {
    /// Create a slide with default properties
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            notes: None,
            properties: SlideProperties::default(),
            incremental_from_previous: false,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_properties(mut self, properties: SlideProperties) -> Self {
        self.properties = properties;
        self
    }

    pub fn incremental(mut self) -> Self {
        self.incremental_from_previous = true;
        self
    }

    /// Whether the slide takes part in the rendered output at all
    pub fn is_visible(&self) -> bool {
        !self.properties.exclude
    }
}

/// The whole deck: global stylesheet plus ordered slides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Deck {
    /// Global CSS injected next to the markdown, never into it
    #[serde(default)]
    pub css: String,
    /// Ordered slides, never empty
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create a deck, rejecting an empty slide list
    pub fn new(css: impl Into<String>, slides: Vec<Slide>) -> DeckResult<Self> {
        let deck = Self {
            css: css.into(),
            slides,
        };
        deck.validate()?;
        Ok(deck)
    }

    /// Parse a deck from its JSON wire form and check the invariants
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let deck: Deck = serde_json::from_str(json)
            .map_err(|e| DeckError::invalid_deck(format!("malformed deck JSON: {}", e)))?;
        deck.validate()?;
        Ok(deck)
    }

    /// Check the model invariants
    pub fn validate(&self) -> DeckResult<()> {
        if self.slides.is_empty() {
            return Err(DeckError::invalid_deck("deck must contain at least one slide"));
        }
        Ok(())
    }

    /// Slides that are not excluded, in presentation order
    pub fn visible_slides(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter().filter(|slide| slide.is_visible())
    }

    /// Number of slides that will actually be emitted
    pub fn visible_slide_count(&self) -> usize {
        self.visible_slides().count()
    }
}
