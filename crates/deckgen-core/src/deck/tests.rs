//! Deck model tests

use super::*;
use crate::error::DeckError;

#[test]
fn test_properties_default_when_omitted() {
    let deck = Deck::from_json(
        r##"{"slides":[{"content":"# A","incrementalFromPrevious":false}]}"##,
    )
    .unwrap();

    assert_eq!(deck.css, "");
    assert_eq!(deck.slides[0].notes, None);
    assert!(deck.slides[0].properties.is_default());
    assert!(deck.slides[0].properties.count);
}

#[test]
fn test_nulls_are_accepted_for_optional_fields() {
    let json = r##"{
        "css": ".a { color: red; }",
        "slides": [{
            "content": "# A",
            "notes": null,
            "properties": {
                "name": null,
                "classes": ["center", "middle"],
                "layout": false,
                "template": null,
                "count": true,
                "exclude": false,
                "backgroundImageUrl": null
            },
            "incrementalFromPrevious": false
        }]
    }"##;

    let deck = Deck::from_json(json).unwrap();
    assert_eq!(deck.slides[0].properties.classes, vec!["center", "middle"]);
}

#[test]
fn test_unknown_fields_are_rejected() {
    let json = r##"{"slides":[{"content":"# A","colour":"red"}]}"##;
    assert!(matches!(
        Deck::from_json(json),
        Err(DeckError::InvalidDeck(_))
    ));
}

#[test]
fn test_empty_slide_list_is_invalid() {
    assert!(matches!(
        Deck::from_json(r#"{"css":"","slides":[]}"#),
        Err(DeckError::InvalidDeck(_))
    ));
    assert!(Deck::new("", Vec::new()).is_err());
}

#[test]
fn test_camel_case_wire_names() {
    let deck = Deck::new(
        "",
        vec![
            Slide::new("# A")
                .with_properties(SlideProperties::default().with_background_image("bg.png"))
                .incremental(),
        ],
    )
    .unwrap();

    let value = serde_json::to_value(&deck).unwrap();
    assert_eq!(value["slides"][0]["incrementalFromPrevious"], true);
    assert_eq!(
        value["slides"][0]["properties"]["backgroundImageUrl"],
        "bg.png"
    );
}

#[test]
fn test_visible_slide_count_skips_excluded() {
    let deck = Deck::new(
        "",
        vec![
            Slide::new("# A"),
            Slide::new("# B").with_properties(SlideProperties::default().excluded()),
            Slide::new("# C"),
        ],
    )
    .unwrap();

    assert_eq!(deck.visible_slide_count(), 2);
    let contents: Vec<_> = deck.visible_slides().map(|s| s.content.as_str()).collect();
    assert_eq!(contents, vec!["# A", "# C"]);
}
