use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};

/// How much the renderer trusts the Markdown it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizePolicy {
    /// Strip scripts, event handlers and other unsafe markup with `ammonia`.
    #[default]
    Sanitize,
    /// Emit the HTML produced by the Markdown parser as-is.
    Trusted,
}

/// Converts release notes and FAQ answers from markup to HTML.
///
/// Abstracted as a trait so page logic can be tested without caring about
/// the exact HTML the Markdown engine emits.
#[cfg_attr(test, mockall::automock)]
pub trait MarkupRenderer {
    /// Render `source` to HTML that is safe to inject under the
    /// renderer's policy.
    fn render(&self, source: &str) -> String;
}

/// `pulldown-cmark` renderer with an explicit sanitization policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    policy: SanitizePolicy,
}

impl MarkdownRenderer {
    pub fn new(policy: SanitizePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SanitizePolicy {
        self.policy
    }
}

impl MarkupRenderer for MarkdownRenderer {
    fn render(&self, source: &str) -> String {
        let raw = render_markdown(source);
        match self.policy {
            SanitizePolicy::Sanitize => ammonia::clean(&raw),
            SanitizePolicy::Trusted => raw,
        }
    }
}

/// Render a raw Markdown string to HTML, without sanitization.
///
/// Supports GitHub Flavored Markdown (GFM) features: tables,
/// footnotes, strikethrough, task lists, and smart punctuation.
pub fn render_markdown(raw: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(raw, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
