use scraper::{ElementRef, Html, Node as HtmlNode};

use super::{Attr, Element, Fragment, Node, NodeId};

/// Parse an HTML fragment the way a browser parses `innerHTML` of a `<body>`
/// child. Never fails: the HTML5 tree builder repairs malformed input, so
/// `<p>one<p>two` yields two sibling paragraphs and a `<li>` opened inside an
/// open `<li>` closes it first.
pub fn parse(html: &str) -> Fragment {
    let document = Html::parse_fragment(html);
    let mut frag = Fragment::new();
    copy_children(&mut frag, None, document.root_element());
    frag
}

fn copy_children(frag: &mut Fragment, parent: Option<NodeId>, source: ElementRef<'_>) {
    for child in source.children() {
        match child.value() {
            HtmlNode::Text(text) => {
                frag.append(parent, Node::Text(String::from(&**text)));
            }
            HtmlNode::Comment(comment) => {
                frag.append(parent, Node::Comment(String::from(&**comment)));
            }
            HtmlNode::Element(el) => {
                let mut element = Element::new(el.name());
                element.attrs = el
                    .attrs()
                    .map(|(name, value)| Attr {
                        name: name.to_string(),
                        value: value.to_string(),
                    })
                    .collect();
                let id = frag.append(parent, Node::Element(element));
                if let Some(child_el) = ElementRef::wrap(child) {
                    copy_children(frag, Some(id), child_el);
                }
            }
            _ => {}
        }
    }
}
