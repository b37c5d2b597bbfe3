//! Rich-text rendering for markdoc fields

use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

lazy_static! {
    /// Markdoc tags such as `{% callout %}`; plain Markdown has no meaning for them
    static ref MARKDOC_TAG: Regex = Regex::new(r"\{%[^%]*%\}").unwrap();
}

/// Renders markdoc field bodies to HTML.
///
/// Markdoc is a superset of CommonMark; tag syntax is stripped and the rest
/// goes through pulldown-cmark.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    smart_punctuation: bool,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            smart_punctuation: true,
        }
    }

    pub fn with_options(smart_punctuation: bool) -> Self {
        Self { smart_punctuation }
    }

    /// Render markdown to HTML
    pub fn render(&self, source: &str) -> String {
        let source = MARKDOC_TAG.replace_all(source, "");

        let mut options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES;
        if self.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }
        let parser = Parser::new_ext(&source, options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }

    /// Render an optional field; blank bodies render as `None`
    pub fn render_field(&self, source: Option<&str>) -> Option<String> {
        source
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| self.render(s))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
