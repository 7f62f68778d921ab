// Template context structures for Askama templates, organized by domain.
// All types are re-exported: `use deckview::templates_structs::*`

mod api;
mod viewer;

pub use api::*;
pub use viewer::*;

/// Context shared by every page: the footer caption and the deck the page is about.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub app_name: String,
    pub deck_id: String,
    pub caption: String,
}

impl PageContext {
    pub fn new(deck_id: &str, caption: &str) -> Self {
        PageContext {
            app_name: "Deckview".to_string(),
            deck_id: deck_id.to_string(),
            caption: caption.to_string(),
        }
    }

    pub fn has_deck(&self) -> bool {
        !self.deck_id.is_empty()
    }
}
