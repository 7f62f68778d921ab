use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::viewer::ViewCursor;

/// Session key holding every saved deck position.
pub const CURSORS_KEY: &str = "cursors";

/// Decks whose position is remembered; older ones are forgotten so the
/// session cookie stays small.
pub const MAX_SAVED_DECKS: usize = 8;

/// Saved positions by deck identifier, least recently stored first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedCursors(Vec<(String, ViewCursor)>);

impl SavedCursors {
    pub fn get(&self, deck_id: &str) -> Option<ViewCursor> {
        self.0
            .iter()
            .find(|(id, _)| id == deck_id)
            .map(|(_, cursor)| *cursor)
    }

    /// Record `cursor` as the most recent entry, dropping the oldest decks
    /// beyond [`MAX_SAVED_DECKS`].
    pub fn put(&mut self, deck_id: &str, cursor: ViewCursor) {
        self.0.retain(|(id, _)| id != deck_id);
        self.0.push((deck_id.to_string(), cursor));
        let overflow = self.0.len().saturating_sub(MAX_SAVED_DECKS);
        self.0.drain(..overflow);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn load_cursors(session: &Session) -> SavedCursors {
    session
        .get::<SavedCursors>(CURSORS_KEY)
        .unwrap_or(None)
        .unwrap_or_default()
}

/// Saved position for a deck; the first slide when nothing is saved or the
/// stored value cannot be read.
pub fn get_cursor(session: &Session, deck_id: &str) -> ViewCursor {
    load_cursors(session).get(deck_id).unwrap_or_default()
}

pub fn store_cursor(session: &Session, deck_id: &str, cursor: ViewCursor) -> Result<(), AppError> {
    let mut cursors = load_cursors(session);
    cursors.put(deck_id, cursor);
    session
        .insert(CURSORS_KEY, cursors)
        .map_err(|e| AppError::Session(format!("Failed to store view cursor: {e}")))
}
