pub mod cache;
pub mod loader;
pub mod types;

pub use cache::DeckCache;
pub use loader::{ContentSource, FsSource, LoadedDeck, caption, deck_path, load_deck};
pub use types::{DEFAULT_TEMPLATE, Deck, Slide, TemplateSet};
