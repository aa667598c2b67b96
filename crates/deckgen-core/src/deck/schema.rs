//! JSON schema describing [`Deck`](super::Deck) for structured model output

use serde_json::{Value, json};

/// Name under which the schema is registered with the generation service
pub const DECK_SCHEMA_NAME: &str = "remark_js_deck";

/// Strict JSON schema for the deck wire format.
///
/// Strict structured output requires every property to be listed as
/// required, so optional fields are expressed as nullable instead.
pub fn deck_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["css", "slides"],
        "properties": {
            "css": {
                "type": "string",
                "description": "Global CSS to inject (e.g., inside a <style> tag)"
            },
            "slides": {
                "type": "array",
                "minItems": 1,
                "description": "Ordered slides",
                "items": slide_schema()
            }
        }
    })
}

fn slide_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["content", "notes", "properties", "incrementalFromPrevious"],
        "properties": {
            "content": {
                "type": "string",
                "description": "Freeform Markdown content for the slide body"
            },
            "notes": {
                "type": ["string", "null"],
                "description": "Speaker notes, rendered after a `???` separator"
            },
            "properties": properties_schema(),
            "incrementalFromPrevious": {
                "type": "boolean",
                "description": "Render after the previous slide with the `--` separator so it inherits the previous content"
            }
        }
    })
}

fn properties_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": [
            "name", "classes", "layout", "template", "count", "exclude", "backgroundImageUrl"
        ],
        "properties": {
            "name": {
                "type": ["string", "null"],
                "description": "`name:` identifier for linking/templates"
            },
            "classes": {
                "type": "array",
                "items": { "type": "string" },
                "description": "`class:` joined as a comma-separated list"
            },
            "layout": {
                "type": "boolean",
                "description": "`layout:` the slide becomes a template for following slides"
            },
            "template": {
                "type": ["string", "null"],
                "description": "`template:` name of another slide to merge from"
            },
            "count": {
                "type": "boolean",
                "description": "`count:` false excludes the slide from the counter"
            },
            "exclude": {
                "type": "boolean",
                "description": "`exclude:` hide this slide entirely"
            },
            "backgroundImageUrl": {
                "type": ["string", "null"],
                "description": "`background-image:` rendered as url(...)"
            }
        }
    })
}
