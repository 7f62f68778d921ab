use serde::Serialize;

use super::sequencer::Viewer;
use super::state::Transition;
use crate::models::deck::Deck;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Advance,
    Retreat,
    OpenOverview,
    CloseOverview,
}

impl NavAction {
    /// Form action names: `next`, `prev`, `overview`, `close`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "next" | "advance" => Some(NavAction::Advance),
            "prev" | "retreat" => Some(NavAction::Retreat),
            "overview" => Some(NavAction::OpenOverview),
            "close" => Some(NavAction::CloseOverview),
            _ => None,
        }
    }

    /// Keyboard bindings. Unbound keys are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(NavAction::Advance),
            "ArrowLeft" => Some(NavAction::Retreat),
            "Escape" => Some(NavAction::CloseOverview),
            _ => None,
        }
    }

    /// Apply to the viewer. Overview actions only change what is displayed
    /// around the slide, so they leave the viewer untouched.
    pub fn apply(self, viewer: &mut Viewer) -> Transition {
        match self {
            NavAction::Advance => viewer.advance(),
            NavAction::Retreat => viewer.retreat(),
            NavAction::OpenOverview | NavAction::CloseOverview => Transition::Unchanged,
        }
    }

    /// Whether the overview grid should be showing after this action, given
    /// whether it was showing before. Only the overview actions change it.
    pub fn overview_after(self, was_open: bool) -> bool {
        match self {
            NavAction::OpenOverview => true,
            NavAction::CloseOverview => false,
            NavAction::Advance | NavAction::Retreat => was_open,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewEntry {
    pub index: usize,
    pub number: usize,
    pub label: String,
}

/// One entry per slide, labelled by title or "Slide N".
pub fn overview_entries(deck: &Deck) -> Vec<OverviewEntry> {
    deck.slides
        .iter()
        .enumerate()
        .map(|(index, slide)| OverviewEntry {
            index,
            number: index + 1,
            label: slide.title().unwrap_or_else(|| format!("Slide {}", index + 1)),
        })
        .collect()
}
