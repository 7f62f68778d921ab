use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Number, Value};

use crate::models::deck::Slide;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([^}]+)\}\}").expect("placeholder pattern is valid")
});

/// Substitute every `{{ key }}` in `template` with the matching slide field.
///
/// Strings and numbers are inserted as-is, sequences become concatenated
/// `<li>` items, anything else (missing, object, bool, null) becomes empty.
/// Output is not escaped: deck JSON is trusted markup.
pub fn apply_template(template: &str, slide: &Slide) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let key = caps[1].trim();
            slide.field(key).map(field_markup).unwrap_or_default()
        })
        .into_owned()
}

fn field_markup(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Array(items) => items
            .iter()
            .map(|item| format!("<li>{}</li>", item_text(item)))
            .collect(),
        _ => String::new(),
    }
}

fn item_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Number as a browser would print it: whole floats lose the fraction
/// (`2.0` is `2`) and negative zero is `0`.
pub fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}
