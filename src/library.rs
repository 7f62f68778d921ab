use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::LoadError;
use crate::models::deck::{DeckCache, FsSource, LoadedDeck};

/// Decks on disk plus the in-memory cache in front of them. Shared by every
/// worker through `web::Data`.
#[derive(Debug)]
pub struct Library {
    source: FsSource,
    cache: DeckCache,
}

impl Library {
    pub fn new(source: FsSource, cache_decks: bool) -> Self {
        Library {
            source,
            cache: DeckCache::new(cache_decks),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(FsSource::new(config.content_dir.clone()), config.cache_decks)
    }

    pub async fn open(&self, id: &str) -> Result<Arc<LoadedDeck>, LoadError> {
        if id.is_empty() {
            return Err(LoadError::MissingParameter);
        }
        self.cache.get_or_load(&self.source, id).await
    }
}
