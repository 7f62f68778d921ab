//! Slide rendering and the reveal/slide state machine.

pub mod navigation;
pub mod render;
pub mod sequencer;
pub mod state;

pub use navigation::{NavAction, OverviewEntry, overview_entries};
pub use render::{RenderedSlide, render_slide};
pub use sequencer::Viewer;
pub use state::{Controls, Transition, ViewCursor, ViewState};
