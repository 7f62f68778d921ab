use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::loader::{ContentSource, LoadedDeck, load_deck};
use crate::errors::LoadError;

/// Loaded decks keyed by identifier. Failed loads are never cached, and a
/// disabled cache reloads on every request.
#[derive(Debug, Default)]
pub struct DeckCache {
    enabled: bool,
    decks: RwLock<HashMap<String, Arc<LoadedDeck>>>,
}

impl DeckCache {
    pub fn new(enabled: bool) -> Self {
        DeckCache {
            enabled,
            decks: RwLock::new(HashMap::new()),
        }
    }

    fn cached(&self, id: &str) -> Option<Arc<LoadedDeck>> {
        if !self.enabled {
            return None;
        }
        let map = self.decks.read().ok()?;
        map.get(id).cloned()
    }

    pub async fn get_or_load(
        &self,
        source: &impl ContentSource,
        id: &str,
    ) -> Result<Arc<LoadedDeck>, LoadError> {
        if let Some(deck) = self.cached(id) {
            return Ok(deck);
        }

        let loaded = Arc::new(load_deck(source, id).await?);
        if self.enabled {
            if let Ok(mut map) = self.decks.write() {
                map.insert(id.to_string(), Arc::clone(&loaded));
            }
        }
        Ok(loaded)
    }

    pub fn len(&self) -> usize {
        self.decks.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
