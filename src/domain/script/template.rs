//! Script placeholder templating.
//!
//! Script texts carry bracketed placeholders like `Hey [Name], ...` that the
//! user fills in right before copying the message. Placeholders are matched
//! with `\[([^\]]+)\]`; anything the user leaves blank stays as the literal
//! `[Name]` so the gap remains visible in the copied text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("placeholder pattern is valid"));

/// A script text with bracketed placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTemplate {
    text: String,
}

impl ScriptTemplate {
    /// Wraps a raw script text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Unique placeholder names in first-occurrence order.
    pub fn placeholders(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for cap in PLACEHOLDER.captures_iter(&self.text) {
            let name = cap[1].to_string();
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    /// Whether the text contains any placeholder.
    pub fn has_placeholders(&self) -> bool {
        PLACEHOLDER.is_match(&self.text)
    }

    /// Substitutes placeholder values into the text.
    ///
    /// Every occurrence of a placeholder is replaced. Placeholders with no
    /// value, or an empty one, are left as-is.
    pub fn render(&self, values: &HashMap<String, String>) -> String {
        PLACEHOLDER
            .replace_all(&self.text, |caps: &regex::Captures<'_>| {
                match values.get(&caps[1]) {
                    Some(value) if !value.is_empty() => value.clone(),
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}
