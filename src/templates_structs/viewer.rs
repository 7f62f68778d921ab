use askama::Template;

use crate::models::deck::LoadedDeck;
use crate::viewer::{Controls, OverviewEntry, Viewer, overview_entries};
use super::PageContext;

#[derive(Template)]
#[template(path = "viewer.html")]
pub struct ViewerTemplate {
    pub ctx: PageContext,
    /// Rendered slide markup, inserted unescaped.
    pub slide_html: String,
    /// Replaces the slide when there is nothing to show.
    pub message: Option<String>,
    pub controls: Controls,
    pub overview: Vec<OverviewEntry>,
    pub overview_open: bool,
}

impl ViewerTemplate {
    pub fn for_viewer(loaded: &LoadedDeck, viewer: &Viewer, overview_open: bool) -> Self {
        ViewerTemplate {
            ctx: PageContext::new(&loaded.id, &loaded.caption),
            slide_html: viewer.slide_html(),
            message: None,
            controls: viewer.controls(),
            overview: overview_entries(&loaded.deck),
            overview_open,
        }
    }

    /// Page with a notice in place of the slide and navigation disabled.
    pub fn notice(deck_id: &str, message: &str) -> Self {
        ViewerTemplate {
            ctx: PageContext::new(deck_id, ""),
            slide_html: String::new(),
            message: Some(message.to_string()),
            controls: Controls::disabled(),
            overview: Vec::new(),
            overview_open: false,
        }
    }
}
