// src/notify/template.rs

//! `$`-style command templates.
//!
//! Recognised forms are `$name`, `${name}` and `$$` (a literal `$`). Names
//! that have no value, and any `$` that doesn't start one of those forms, are
//! copied through unchanged, so a template can never fail to render.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\})")
        .expect("placeholder pattern is valid")
});

/// Substitute `values` into `template`.
pub fn render<V: AsRef<str>>(template: &str, values: &[(&str, V)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }

            let name = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();

            match values.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => value.as_ref().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
