//! Navigation surface tests: key bindings, form actions and the overview grid.

mod common;

use deckview::models::deck::Deck;
use deckview::viewer::{NavAction, Transition, Viewer, overview_entries};
use common::*;
use serde_json::json;

#[test]
fn test_arrow_keys_map_to_retreat_and_advance() {
    assert_eq!(NavAction::from_key("ArrowRight"), Some(NavAction::Advance));
    assert_eq!(NavAction::from_key("ArrowLeft"), Some(NavAction::Retreat));
    assert_eq!(NavAction::from_key("Escape"), Some(NavAction::CloseOverview));
    assert_eq!(NavAction::from_key("Enter"), None);
    assert_eq!(NavAction::from_key("arrowright"), None);
}

#[test]
fn test_form_action_names() {
    assert_eq!(NavAction::from_name("next"), Some(NavAction::Advance));
    assert_eq!(NavAction::from_name("prev"), Some(NavAction::Retreat));
    assert_eq!(NavAction::from_name("overview"), Some(NavAction::OpenOverview));
    assert_eq!(NavAction::from_name("close"), Some(NavAction::CloseOverview));
    assert_eq!(NavAction::from_name("explode"), None);
}

#[test]
fn test_overview_actions_leave_viewer_untouched() {
    let mut v = Viewer::new(reveal_deck(), reveal_templates());
    v.advance();
    let before = v.cursor();

    assert_eq!(NavAction::OpenOverview.apply(&mut v), Transition::Unchanged);
    assert_eq!(NavAction::CloseOverview.apply(&mut v), Transition::Unchanged);
    assert_eq!(v.cursor(), before);

}

#[test]
fn test_only_overview_actions_change_overview_visibility() {
    assert!(NavAction::OpenOverview.overview_after(false));
    assert!(!NavAction::CloseOverview.overview_after(true));
    assert!(NavAction::Advance.overview_after(true));
    assert!(NavAction::Retreat.overview_after(true));
    assert!(!NavAction::Advance.overview_after(false));
}

#[test]
fn test_step_actions_drive_the_viewer() {
    let mut v = Viewer::new(reveal_deck(), reveal_templates());
    assert_eq!(NavAction::Advance.apply(&mut v), Transition::SlideChanged(1));
    assert_eq!(NavAction::Advance.apply(&mut v), Transition::Revealed(0));
    assert_eq!(NavAction::Retreat.apply(&mut v), Transition::Hidden(0));
}

#[test]
fn test_overview_labels_fall_back_to_slide_number() {
    let deck = Deck::new(
        None,
        vec![
            slide(json!({"type": "title", "title": "Intro"})),
            slide(json!({"type": "bullets"})),
            slide(json!({"type": "title", "title": ""})),
        ],
    );
    let entries = overview_entries(&deck);

    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Intro", "Slide 2", "Slide 3"]);
    let numbers: Vec<usize> = entries.iter().map(|e| e.number).collect();
    assert_eq!(numbers, [1, 2, 3]);
    assert_eq!(entries[2].index, 2);
}
