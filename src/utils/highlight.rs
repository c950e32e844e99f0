//! HTML escaping and keyword highlighting for table cells.

use regex::{Regex, RegexBuilder};

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps case-insensitive keyword matches in `<b>` tags.
///
/// Matching runs on the raw text and every segment is escaped afterwards, so
/// keywords never match inside generated entities or markup.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let mut literals: Vec<&str> = keywords
            .iter()
            .map(|k| k.as_ref())
            .filter(|k| !k.is_empty())
            .collect();
        if literals.is_empty() {
            return Self::default();
        }

        // longer keywords win when one contains another
        literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        literals.dedup();

        let alternation = literals
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");

        match RegexBuilder::new(&alternation).case_insensitive(true).build() {
            Ok(pattern) => Self { pattern: Some(pattern) },
            Err(e) => {
                tracing::warn!("Highlighting disabled, keyword pattern rejected: {}", e);
                Self::default()
            }
        }
    }

    /// Escaped HTML for `text` with keyword matches in bold.
    pub fn render(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return escape_html(text);
        };

        let mut out = String::with_capacity(text.len() + 16);
        let mut last = 0;
        for m in pattern.find_iter(text) {
            out.push_str(&escape_html(&text[last..m.start()]));
            out.push_str("<b>");
            out.push_str(&escape_html(m.as_str()));
            out.push_str("</b>");
            last = m.end();
        }
        out.push_str(&escape_html(&text[last..]));
        out
    }
}
