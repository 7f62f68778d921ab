//! Shared test infrastructure: sample decks, templates and content directories.
//!
//! # Fixtures
//! - `scenario_deck()` / `scenario_templates()` - the two-slide title + bullets deck
//! - `reveal_deck()` - three slides with 0, 3 and 2 revealable items
//! - `setup_content_dir()` - temp directory laid out like `./content`
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use serde_json::{Value, json};
use tempfile::TempDir;

use deckview::models::deck::{Deck, Slide, TemplateSet};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const DEMO_ID: &str = "demo";

pub const TEMPLATES_JSON: &str = r#"{
    "title": "<h1>{{title}}</h1>",
    "bullets": "<ul class=\"animate-children\">{{items}}</ul>",
    "pair": "<div class=\"animate-children\"><p>{{ left }}</p><p>{{ right }}</p></div>",
    "default": "<p>{{ body }}</p>"
}"#;

pub const DEMO_DECK_JSON: &str = r#"{
    "header": "Quarterly Review",
    "slides": [
        { "type": "title", "title": "Intro" },
        { "type": "bullets", "title": "Agenda", "items": ["a", "b", "c"] },
        { "type": "pair", "left": "L", "right": "R" }
    ]
}"#;

// ============================================================================
// IN-MEMORY FIXTURES
// ============================================================================

pub fn slide(value: Value) -> Slide {
    serde_json::from_value(value).expect("slide fixture must be an object")
}

/// Deck from the title/bullets walkthrough.
pub fn scenario_deck() -> Arc<Deck> {
    Arc::new(Deck::new(
        None,
        vec![
            slide(json!({"type": "title", "title": "Intro"})),
            slide(json!({"type": "bullets", "items": ["a", "b"]})),
        ],
    ))
}

pub fn scenario_templates() -> Arc<TemplateSet> {
    Arc::new(TemplateSet::from_pairs([
        ("title", "<h1>{{title}}</h1>"),
        ("bullets", r#"<ul class="animate-children"><li>{{items}}</li></ul>"#),
    ]))
}

pub fn reveal_templates() -> Arc<TemplateSet> {
    Arc::new(serde_json::from_str(TEMPLATES_JSON).expect("templates fixture"))
}

/// Slides with 0, 3 and 2 revealable items.
pub fn reveal_deck() -> Arc<Deck> {
    Arc::new(serde_json::from_str(DEMO_DECK_JSON).expect("deck fixture"))
}

// ============================================================================
// CONTENT DIRECTORIES
// ============================================================================

/// Temp directory with `templates.json` and `json/demo.json`.
///
/// The TempDir must be kept alive for as long as the directory is used.
pub fn setup_content_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::create_dir_all(dir.path().join("json")).expect("Failed to create json dir");
    write_file(dir.path(), "templates.json", TEMPLATES_JSON);
    write_deck(dir.path(), DEMO_ID, DEMO_DECK_JSON);
    dir
}

pub fn write_deck(root: &Path, id: &str, json: &str) {
    write_file(root, &format!("json/{id}.json"), json);
}

pub fn write_file(root: &Path, relative: &str, contents: &str) {
    std::fs::write(root.join(relative), contents).expect("Failed to write fixture file");
}
