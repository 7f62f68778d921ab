use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::engine::number_text;

/// Template key used when a slide's `type` has no template of its own.
pub const DEFAULT_TEMPLATE: &str = "default";

/// One slide record. Any JSON object is accepted; `type` picks the template
/// and every other field is available to it as a `{{ placeholder }}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slide(pub Map<String, Value>);

impl Slide {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn slide_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Title text for the overview grid. Empty strings and zero count as no title.
    pub fn title(&self) -> Option<String> {
        match self.0.get("title")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(number_text(n)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default, deserialize_with = "header_text")]
    pub header: Option<String>,
    // A deck with no `slides` key is loaded as empty and rejected by the loader.
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn new(header: Option<&str>, slides: Vec<Slide>) -> Self {
        Deck {
            header: header.map(String::from),
            slides,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }
}

/// Accepts any JSON `header`. Strings are kept, non-zero numbers and `true`
/// become their text; everything else means no header.
fn header_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(number_text(&n)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    })
}

/// Slide type name -> template markup, shared by every deck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateSet(pub HashMap<String, String>);

impl TemplateSet {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        TemplateSet(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact match on the slide type, falling back to the `default` template.
    /// An empty template counts as missing.
    pub fn lookup(&self, slide_type: Option<&str>) -> Option<&str> {
        let get = |key: &str| self.0.get(key).map(String::as_str).filter(|t| !t.is_empty());
        slide_type.and_then(get).or_else(|| get(DEFAULT_TEMPLATE))
    }
}
