use serde::{Deserialize, Serialize};

use crate::markup::NodeId;

/// Position within the deck plus the revealables of the current slide.
/// `revealables` is rebuilt on every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub slide_index: usize,
    pub reveal_step: usize,
    pub revealables: Vec<NodeId>,
}

impl ViewState {
    pub fn revealable_count(&self) -> usize {
        self.revealables.len()
    }

    pub fn cursor(&self) -> ViewCursor {
        ViewCursor {
            slide_index: self.slide_index,
            reveal_step: self.reveal_step,
        }
    }
}

/// The persistent part of [`ViewState`]: enough to rebuild it after a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCursor {
    pub slide_index: usize,
    pub reveal_step: usize,
}

/// What a navigation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "position", rename_all = "snake_case")]
pub enum Transition {
    /// Revealable at this position became visible.
    Revealed(usize),
    /// Revealable at this position was hidden again.
    Hidden(usize),
    /// A different slide is now rendered.
    SlideChanged(usize),
    Unchanged,
}

/// Snapshot for the navigation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub slide_index: usize,
    pub total: usize,
    pub reveal_step: usize,
    pub revealable_count: usize,
    pub can_retreat: bool,
    pub can_advance: bool,
}

impl Controls {
    /// Both directions off; used when no deck is loaded.
    pub fn disabled() -> Self {
        Controls {
            slide_index: 0,
            total: 0,
            reveal_step: 0,
            revealable_count: 0,
            can_retreat: false,
            can_advance: false,
        }
    }

    pub fn position_label(&self) -> String {
        format!("{} / {}", self.slide_index + 1, self.total)
    }
}
