use serde::Serialize;

use crate::models::deck::LoadedDeck;
use crate::viewer::{Controls, OverviewEntry, Transition, Viewer, overview_entries};

/// Deck state returned by every `/api/v1/decks` endpoint.
#[derive(Serialize, Debug, Clone)]
pub struct ApiDeckState {
    pub id: String,
    pub caption: String,
    pub position: String,
    pub controls: Controls,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    pub slide_html: String,
    pub overview: Vec<OverviewEntry>,
}

impl ApiDeckState {
    pub fn new(loaded: &LoadedDeck, viewer: &Viewer, transition: Option<Transition>) -> Self {
        let controls = viewer.controls();
        ApiDeckState {
            id: loaded.id.clone(),
            caption: loaded.caption.clone(),
            position: controls.position_label(),
            controls,
            transition,
            slide_html: viewer.slide_html(),
            overview: overview_entries(&loaded.deck),
        }
    }
}
