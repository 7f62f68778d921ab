//! Slide renderer tests: template selection, wrapping and revealable extraction.

mod common;

use deckview::models::deck::TemplateSet;
use deckview::viewer::render::{REVEALABLE_CLASS, VISIBLE_CLASS, render_slide};
use common::{scenario_templates, slide};
use serde_json::json;

#[test]
fn test_title_slide_renders_inside_slide_wrapper() {
    let rendered = render_slide(&slide(json!({"type": "title", "title": "Intro"})), &scenario_templates());
    assert_eq!(
        rendered.to_html(),
        r#"<div class="slide active w-full h-full"><h1>Intro</h1></div>"#
    );
    assert!(rendered.revealables.is_empty());
}

#[test]
fn test_direct_children_of_group_are_revealable_and_hidden() {
    let templates = TemplateSet::from_pairs([(
        "bullets",
        r#"<ul class="animate-children">{{items}}</ul>"#,
    )]);
    let rendered = render_slide(&slide(json!({"type": "bullets", "items": ["a", "b"]})), &templates);

    assert_eq!(rendered.revealables.len(), 2);
    for id in &rendered.revealables {
        assert!(rendered.markup.has_class(*id, REVEALABLE_CLASS));
        assert!(!rendered.markup.has_class(*id, VISIBLE_CLASS));
    }
    assert!(rendered.to_html().contains(r#"<li class="fade-in-item">a</li>"#));
}

#[test]
fn test_items_expanded_inside_template_li_become_sibling_revealables() {
    // An <li> opened inside an open <li> closes it, so the template's own
    // <li> is left empty and each generated item is a child of the group.
    let rendered = render_slide(
        &slide(json!({"type": "bullets", "items": ["a", "b"]})),
        &scenario_templates(),
    );
    assert_eq!(rendered.revealables.len(), 3);
    assert_eq!(
        rendered.to_html(),
        concat!(
            r#"<div class="slide active w-full h-full"><ul class="animate-children">"#,
            r#"<li class="fade-in-item"></li><li class="fade-in-item">a</li><li class="fade-in-item">b</li>"#,
            "</ul></div>"
        )
    );
}

#[test]
fn test_implicitly_closed_paragraphs_are_separate_revealables() {
    let templates = TemplateSet::from_pairs([(
        "steps",
        "<div class=\"animate-children\"><p>one<p>two<p>three</div>",
    )]);
    let mut rendered = render_slide(&slide(json!({"type": "steps"})), &templates);
    assert_eq!(rendered.revealables.len(), 3);

    rendered.set_visible(0, true);
    assert!(rendered.to_html().contains(concat!(
        r#"<p class="fade-in-item visible">one</p>"#,
        r#"<p class="fade-in-item">two</p><p class="fade-in-item">three</p>"#
    )));
}

#[test]
fn test_text_children_are_not_revealable() {
    let templates = TemplateSet::from_pairs([(
        "mixed",
        r#"<div class="animate-children">intro <span>1</span> middle <span>2</span></div>"#,
    )]);
    let rendered = render_slide(&slide(json!({"type": "mixed"})), &templates);
    assert_eq!(rendered.revealables.len(), 2);
}

#[test]
fn test_revealables_span_all_groups_in_document_order() {
    let templates = TemplateSet::from_pairs([(
        "two",
        r#"<ol class="animate-children"><li>1</li><li>2</li></ol><div class="box animate-children"><p>3</p></div>"#,
    )]);
    let rendered = render_slide(&slide(json!({"type": "two"})), &templates);
    let tags: Vec<&str> = rendered
        .revealables
        .iter()
        .filter_map(|id| rendered.markup.element(*id))
        .map(|el| el.tag.as_str())
        .collect();
    assert_eq!(tags, ["li", "li", "p"]);
}

#[test]
fn test_unknown_type_falls_back_to_default() {
    let templates = TemplateSet::from_pairs([("default", "<p>{{body}}</p>")]);
    let rendered = render_slide(&slide(json!({"type": "chart", "body": "x"})), &templates);
    assert_eq!(rendered.to_html(), r#"<div class="slide active w-full h-full"><p>x</p></div>"#);
}

#[test]
fn test_empty_type_template_falls_back_to_default() {
    let templates = TemplateSet::from_pairs([("title", ""), ("default", "<p>{{title}}</p>")]);
    let rendered = render_slide(&slide(json!({"type": "title", "title": "Hi"})), &templates);
    assert_eq!(rendered.to_html(), r#"<div class="slide active w-full h-full"><p>Hi</p></div>"#);
}

#[test]
fn test_slide_without_type_uses_default() {
    let templates = TemplateSet::from_pairs([("default", "<p>{{body}}</p>")]);
    let rendered = render_slide(&slide(json!({"body": "y"})), &templates);
    assert!(rendered.to_html().contains("<p>y</p>"));
}

#[test]
fn test_no_matching_template_and_no_default_renders_nothing() {
    let templates = TemplateSet::from_pairs([("title", "<h1>{{title}}</h1>")]);
    let rendered = render_slide(&slide(json!({"type": "chart"})), &templates);
    assert_eq!(rendered.to_html(), "");
    assert!(rendered.revealables.is_empty());
}

#[test]
fn test_set_visible_toggles_class() {
    let templates = TemplateSet::from_pairs([("b", r#"<ul class="animate-children">{{items}}</ul>"#)]);
    let mut rendered = render_slide(&slide(json!({"type": "b", "items": ["a"]})), &templates);

    rendered.set_visible(0, true);
    assert!(rendered.is_visible(0));
    assert!(rendered.to_html().contains(r#"<li class="fade-in-item visible">a</li>"#));

    rendered.set_visible(0, false);
    assert!(!rendered.is_visible(0));
    assert!(rendered.to_html().contains(r#"<li class="fade-in-item">a</li>"#));

    // Out of range is ignored.
    rendered.set_visible(5, true);
    assert!(!rendered.is_visible(5));
}
