use std::sync::Arc;

use super::render::{RenderedSlide, render_slide};
use super::state::{Controls, Transition, ViewCursor, ViewState};
use crate::models::deck::{Deck, TemplateSet};

/// Steps through a deck: reveals within a slide first, then moves between
/// slides. Every slide change re-renders and resets the reveal step to 0,
/// in both directions.
#[derive(Debug, Clone)]
pub struct Viewer {
    deck: Arc<Deck>,
    templates: Arc<TemplateSet>,
    state: ViewState,
    slide: RenderedSlide,
}

impl Viewer {
    /// Start at the first slide, nothing revealed.
    pub fn new(deck: Arc<Deck>, templates: Arc<TemplateSet>) -> Self {
        let mut viewer = Viewer {
            deck,
            templates,
            state: ViewState::default(),
            slide: RenderedSlide::default(),
        };
        viewer.render(0);
        viewer
    }

    /// Rebuild a viewer at a saved position. Out-of-range values are clamped.
    pub fn restore(deck: Arc<Deck>, templates: Arc<TemplateSet>, cursor: ViewCursor) -> Self {
        let mut viewer = Self::new(deck, templates);
        let index = cursor.slide_index.min(viewer.deck.last_index());
        if index != 0 {
            viewer.render(index);
        }
        viewer.reveal_to(cursor.reveal_step);
        viewer
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn cursor(&self) -> ViewCursor {
        self.state.cursor()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn slide(&self) -> &RenderedSlide {
        &self.slide
    }

    pub fn slide_html(&self) -> String {
        self.slide.to_html()
    }

    /// Replace the current slide with the one at `index`, nothing revealed.
    /// Renders nothing when the deck or template set is empty.
    pub fn render(&mut self, index: usize) {
        self.slide = RenderedSlide::default();
        self.state.reveal_step = 0;
        self.state.revealables.clear();

        if self.deck.is_empty() {
            return;
        }
        let index = index.min(self.deck.last_index());
        self.state.slide_index = index;
        if self.templates.is_empty() {
            return;
        }
        if let Some(slide) = self.deck.slide(index) {
            self.slide = render_slide(slide, &self.templates);
            self.state.revealables = self.slide.revealables.clone();
        }
        log::debug!(
            "Rendered slide {} with {} revealables",
            index,
            self.state.revealables.len()
        );
    }

    pub fn advance(&mut self) -> Transition {
        let step = self.state.reveal_step;
        if step < self.state.revealable_count() {
            self.slide.set_visible(step, true);
            self.state.reveal_step += 1;
            return Transition::Revealed(step);
        }
        if !self.deck.is_empty() && self.state.slide_index < self.deck.last_index() {
            let next = self.state.slide_index + 1;
            self.render(next);
            return Transition::SlideChanged(next);
        }
        Transition::Unchanged
    }

    pub fn retreat(&mut self) -> Transition {
        if self.state.reveal_step > 0 {
            self.state.reveal_step -= 1;
            let step = self.state.reveal_step;
            self.slide.set_visible(step, false);
            return Transition::Hidden(step);
        }
        if self.state.slide_index > 0 {
            let prev = self.state.slide_index - 1;
            self.render(prev);
            return Transition::SlideChanged(prev);
        }
        Transition::Unchanged
    }

    /// Jump straight to a slide, as from the overview grid. `None` when the
    /// index is outside the deck.
    pub fn jump_to(&mut self, index: usize) -> Option<Transition> {
        if index >= self.deck.len() {
            return None;
        }
        self.render(index);
        Some(Transition::SlideChanged(index))
    }

    /// Reveal items on the current slide until `step` are visible, never
    /// crossing into the next slide.
    pub fn reveal_to(&mut self, step: usize) {
        let target = step.min(self.state.revealable_count());
        while self.state.reveal_step < target {
            self.advance();
        }
    }

    pub fn controls(&self) -> Controls {
        let total = self.deck.len();
        let is_last_slide = self.state.slide_index + 1 >= total;
        Controls {
            slide_index: self.state.slide_index,
            total,
            reveal_step: self.state.reveal_step,
            revealable_count: self.state.revealable_count(),
            can_retreat: !(self.state.slide_index == 0 && self.state.reveal_step == 0),
            can_advance: !(is_last_slide
                && self.state.reveal_step == self.state.revealable_count()),
        }
    }
}
