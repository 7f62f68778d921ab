use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::types::{Deck, TemplateSet};
use crate::errors::LoadError;

/// Shared template document, relative to the content root.
pub const TEMPLATES_PATH: &str = "templates.json";

/// Directory holding one `<id>.json` per deck, relative to the content root.
pub const DECKS_DIR: &str = "json";

/// Where deck and template documents come from.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError>;
}

/// Reads documents from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsSource { root: root.into() }
    }
}

impl ContentSource for FsSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let full = self.root.join(path);
        log::debug!("Reading {}", full.display());
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|e| LoadError::Fetch {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }
}

/// A deck ready to be viewed, plus the caption derived from its identifier.
#[derive(Debug, Clone)]
pub struct LoadedDeck {
    pub id: String,
    pub caption: String,
    pub deck: Arc<Deck>,
    pub templates: Arc<TemplateSet>,
}

/// Location of a deck document. Identifiers that could escape the decks
/// directory are refused before anything is read.
pub fn deck_path(id: &str) -> Result<String, LoadError> {
    let unsafe_id = id.is_empty()
        || id.contains(['/', '\\', '\0'])
        || id.contains("..");
    if unsafe_id {
        return Err(LoadError::Fetch {
            path: id.to_string(),
            reason: "invalid deck identifier".to_string(),
        });
    }
    Ok(format!("{DECKS_DIR}/{id}.json"))
}

/// Caption for the footer: the identifier without a trailing `.json`,
/// prefixed by the deck's header when it has one.
pub fn caption(header: Option<&str>, id: &str) -> String {
    let name = match id.len().checked_sub(5) {
        Some(cut) if id.is_char_boundary(cut) && id[cut..].eq_ignore_ascii_case(".json") => &id[..cut],
        _ => id,
    };
    match header.filter(|h| !h.is_empty()) {
        Some(header) => format!("{header}, {name}"),
        None => name.to_string(),
    }
}

fn parse_json<T: DeserializeOwned>(path: &str, json: &str) -> Result<T, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Fetch the deck and the shared templates concurrently. Either failure
/// fails the whole load; nothing partial is returned.
pub async fn load_deck(source: &impl ContentSource, id: &str) -> Result<LoadedDeck, LoadError> {
    let path = deck_path(id)?;
    let (deck_json, templates_json) =
        tokio::try_join!(source.fetch(&path), source.fetch(TEMPLATES_PATH))?;

    let deck: Deck = parse_json(&path, &deck_json)?;
    let templates: TemplateSet = parse_json(TEMPLATES_PATH, &templates_json)?;

    if deck.is_empty() {
        return Err(LoadError::EmptyDeck { id: id.to_string() });
    }

    log::info!(
        "Loaded deck {id}: {} slides, {} templates",
        deck.len(),
        templates.0.len()
    );

    Ok(LoadedDeck {
        id: id.to_string(),
        caption: caption(deck.header.as_deref(), id),
        deck: Arc::new(deck),
        templates: Arc::new(templates),
    })
}
