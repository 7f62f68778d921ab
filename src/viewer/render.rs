use crate::engine::apply_template;
use crate::markup::{self, Fragment, NodeId};
use crate::models::deck::{Slide, TemplateSet};

/// Marks a container whose direct children are revealed one step at a time.
pub const ANIMATION_GROUP_CLASS: &str = "animate-children";
/// Carried by every revealable element.
pub const REVEALABLE_CLASS: &str = "fade-in-item";
/// Added to a revealable element once it has been revealed.
pub const VISIBLE_CLASS: &str = "visible";
/// Classes of the element wrapping each rendered slide.
pub const SLIDE_CLASS: &str = "slide active w-full h-full";

/// One slide's markup tree and the handles of its revealable elements, in
/// reveal order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedSlide {
    pub markup: Fragment,
    pub revealables: Vec<NodeId>,
}

impl RenderedSlide {
    pub fn to_html(&self) -> String {
        self.markup.to_html()
    }

    pub fn set_visible(&mut self, position: usize, visible: bool) {
        let Some(id) = self.revealables.get(position).copied() else {
            return;
        };
        if visible {
            self.markup.add_class(id, VISIBLE_CLASS);
        } else {
            self.markup.remove_class(id, VISIBLE_CLASS);
        }
    }

    pub fn is_visible(&self, position: usize) -> bool {
        self.revealables
            .get(position)
            .is_some_and(|id| self.markup.has_class(*id, VISIBLE_CLASS))
    }
}

/// Render one slide through its template. A slide with no usable template
/// renders as an empty fragment with nothing to reveal.
pub fn render_slide(slide: &Slide, templates: &TemplateSet) -> RenderedSlide {
    let Some(template) = templates.lookup(slide.slide_type()) else {
        log::warn!(
            "No template for slide type {:?} and no default template",
            slide.slide_type()
        );
        return RenderedSlide::default();
    };

    let html = apply_template(template, slide);
    let mut markup = markup::parse(&html);
    markup.wrap("div", SLIDE_CLASS);

    let mut revealables = Vec::new();
    for group in markup.find_by_class(ANIMATION_GROUP_CLASS) {
        for child in markup.element_children(group) {
            markup.add_class(child, REVEALABLE_CLASS);
            revealables.push(child);
        }
    }

    RenderedSlide {
        markup,
        revealables,
    }
}
