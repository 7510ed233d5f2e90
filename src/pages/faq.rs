use serde::Serialize;

use crate::error::AppError;
use crate::models::faq::FaqDocument;
use crate::page::PageHost;
use crate::rendering::markdown::MarkupRenderer;
use crate::rendering::templates;
use crate::sources::faq::FaqSource;

use super::ErrorNotice;

pub const LOAD_FAILED: &str = "Failed to load the FAQ. Please try again later.";

/// Elements the FAQ page exposes.
#[derive(Debug, Clone)]
pub struct FaqTarget {
    pub title_id: String,
    pub description_id: String,
    pub content_id: String,
}

/// Position of a question/answer pair: category index, then question index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub section: usize,
    pub item: usize,
}

impl ItemRef {
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// A question/answer pair. Collapsed unless `active`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer_html: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqSection {
    pub title: String,
    pub items: Vec<FaqItem>,
}

/// The rendered FAQ, including the display state of every pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqView {
    pub title: String,
    pub description: String,
    pub sections: Vec<FaqSection>,
}

impl FaqView {
    /// Build the view from a document, keeping category and question order.
    /// Every pair starts collapsed.
    pub fn from_document(document: FaqDocument, renderer: &dyn MarkupRenderer) -> Self {
        let sections = document
            .categories
            .into_iter()
            .map(|category| FaqSection {
                title: category.title,
                items: category
                    .questions
                    .into_iter()
                    .map(|q| FaqItem {
                        answer_html: renderer.render(&q.answer),
                        question: q.question,
                        active: false,
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: document.title,
            description: document.description,
            sections,
        }
    }

    pub fn item(&self, at: ItemRef) -> Option<&FaqItem> {
        self.sections.get(at.section)?.items.get(at.item)
    }

    pub fn is_active(&self, at: ItemRef) -> bool {
        self.item(at).is_some_and(|item| item.active)
    }

    /// Flip the display state of one pair and return its new state.
    ///
    /// Other pairs are left untouched, so any number of answers can be open
    /// at once. Returns `None` if `at` does not name a pair.
    pub fn toggle(&mut self, at: ItemRef) -> Option<bool> {
        let item = self.sections.get_mut(at.section)?.items.get_mut(at.item)?;
        item.active = !item.active;
        Some(item.active)
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// The HTML of every section, for the content container.
    pub fn sections_html(&self) -> Result<String, AppError> {
        templates::faq_html(&self.sections)
    }
}

/// What a FAQ render produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FaqOutcome {
    Loaded(FaqView),
    Failed(ErrorNotice),
}

impl FaqOutcome {
    pub fn view(&self) -> Option<&FaqView> {
        match self {
            FaqOutcome::Loaded(view) => Some(view),
            FaqOutcome::Failed(_) => None,
        }
    }
}

/// Fetch the FAQ document and build its view.
pub async fn load_faq(source: &dyn FaqSource, renderer: &dyn MarkupRenderer) -> FaqOutcome {
    match source.load_document().await {
        Ok(document) => {
            let view = FaqView::from_document(document, renderer);
            tracing::info!(
                "Loaded FAQ with {} categories and {} questions",
                view.sections.len(),
                view.item_count()
            );
            FaqOutcome::Loaded(view)
        }
        Err(e) => {
            tracing::error!("Error loading FAQ: {e}");
            FaqOutcome::Failed(ErrorNotice::new(LOAD_FAILED))
        }
    }
}

/// Load the FAQ and write it into the page.
///
/// On success the title and description elements receive the document's
/// text and the content container receives every section. On failure only
/// the content container changes, to a single error notice.
///
/// All three elements must exist; otherwise nothing is fetched or written.
pub async fn render_faq(
    source: &dyn FaqSource,
    renderer: &dyn MarkupRenderer,
    target: &FaqTarget,
    page: &mut dyn PageHost,
) -> Result<FaqOutcome, AppError> {
    page.require(&[
        target.title_id.as_str(),
        target.description_id.as_str(),
        target.content_id.as_str(),
    ])?;

    let outcome = load_faq(source, renderer).await;
    match &outcome {
        FaqOutcome::Loaded(view) => {
            let content = match view.sections_html() {
                Ok(html) => html,
                Err(e) => {
                    tracing::error!("Error rendering FAQ: {e}");
                    let notice = ErrorNotice::new(LOAD_FAILED);
                    page.replace_html(&target.content_id, &notice.to_html())?;
                    return Ok(FaqOutcome::Failed(notice));
                }
            };
            page.set_text(&target.title_id, &view.title)?;
            page.set_text(&target.description_id, &view.description)?;
            page.replace_html(&target.content_id, &content)?;
        }
        FaqOutcome::Failed(notice) => {
            page.replace_html(&target.content_id, &notice.to_html())?;
        }
    }
    Ok(outcome)
}
