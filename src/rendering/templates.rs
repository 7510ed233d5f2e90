use std::sync::LazyLock;

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::AppError;

const CHANGELOG: &str = "changelog.html";
const FAQ: &str = "faq.html";
const NOTICE: &str = "notice.html";

/// Template engine built once from the templates embedded in the binary.
///
/// Names end in `.html`, so Tera autoescapes every interpolated value that
/// is not explicitly marked `safe`.
static ENGINE: LazyLock<Result<Tera, String>> = LazyLock::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (CHANGELOG, include_str!("../../templates/changelog.html")),
        (FAQ, include_str!("../../templates/faq.html")),
        (NOTICE, include_str!("../../templates/notice.html")),
    ])
    .map_err(|e| e.to_string())?;
    Ok(tera)
});

fn engine() -> Result<&'static Tera, AppError> {
    ENGINE.as_ref().map_err(|e| AppError::Render(e.clone()))
}

fn render<T: Serialize>(name: &str, key: &str, value: &T) -> Result<String, AppError> {
    let mut context = Context::new();
    context.insert(key, value);
    Ok(engine()?.render(name, &context)?)
}

/// Render release cards in the given order.
pub fn changelog_html<T: Serialize>(cards: &[T]) -> Result<String, AppError> {
    render(CHANGELOG, "cards", &cards)
}

/// Render FAQ sections in the given order.
pub fn faq_html<T: Serialize>(sections: &[T]) -> Result<String, AppError> {
    render(FAQ, "sections", &sections)
}

/// Render a single, static error notice.
///
/// Falls back to a hand-escaped paragraph if the template engine fails, so a
/// failure report can always be written.
pub fn notice_html(message: &str) -> String {
    render(NOTICE, "message", &message).unwrap_or_else(|e| {
        tracing::error!("Failed to render error notice: {e}");
        format!(
            "<p class=\"error-notice\">{}</p>",
            tera::escape_html(message)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_engine_loads() {
        assert!(engine().is_ok());
    }

    #[test]
    fn test_engine_is_built_once() {
        let first = engine().unwrap();
        let second = engine().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.get_template_names().any(|name| name == NOTICE));
    }

    #[test]
    fn test_changelog_escapes_title_but_not_body() {
        let cards = vec![json!({
            "title": "<b>v1</b>",
            "date": "May 1, 2024",
            "body_html": "<p>notes</p>",
        })];
        let html = changelog_html(&cards).unwrap();
        assert!(html.contains("&lt;b&gt;v1&lt;"));
        assert!(html.contains("<div class=\"release-body\"><p>notes</p></div>"));
        assert_eq!(html.matches("class=\"release-card\"").count(), 1);
    }

    #[test]
    fn test_faq_marks_active_items() {
        let sections = vec![json!({
            "title": "General",
            "items": [
                {"question": "Q1", "answer_html": "<p>A1</p>", "active": false},
                {"question": "Q2", "answer_html": "<p>A2</p>", "active": true},
            ],
        })];
        let html = faq_html(&sections).unwrap();
        assert_eq!(html.matches("class=\"faq-item\"").count(), 1);
        assert_eq!(html.matches("class=\"faq-item active\"").count(), 1);
        assert!(html.contains("data-section=\"0\" data-item=\"1\""));
    }

    #[test]
    fn test_notice() {
        let html = notice_html("Failed to load <releases>");
        assert_eq!(
            html.trim(),
            "<p class=\"error-notice\">Failed to load &lt;releases&gt;</p>"
        );
    }
}
