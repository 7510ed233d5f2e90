use serde::Serialize;

use crate::error::AppError;
use crate::models::release::Release;
use crate::page::PageHost;
use crate::rendering::date::format_release_date;
use crate::rendering::markdown::MarkupRenderer;
use crate::rendering::templates;
use crate::sources::releases::ReleaseSource;

use super::ErrorNotice;

pub const UNNAMED_RELEASE: &str = "Unnamed Release";
pub const NO_DESCRIPTION: &str = "No description provided.";
pub const UNPUBLISHED: &str = "Unpublished";
pub const LOAD_FAILED: &str = "Failed to load the changelog. Please try again later.";

/// Where the changelog is written on the host page.
#[derive(Debug, Clone)]
pub struct ChangelogTarget {
    pub container_id: String,
}

/// One rendered release.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseCard {
    pub title: String,
    pub date: String,
    /// Release notes as HTML, or the escaped fallback text.
    pub body_html: String,
}

/// What a changelog render produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangelogView {
    Cards(Vec<ReleaseCard>),
    Failed(ErrorNotice),
}

impl ChangelogView {
    pub fn cards(&self) -> &[ReleaseCard] {
        match self {
            ChangelogView::Cards(cards) => cards,
            ChangelogView::Failed(_) => &[],
        }
    }

    /// The HTML that replaces the container's content.
    pub fn to_html(&self) -> String {
        match self {
            ChangelogView::Cards(cards) => templates::changelog_html(cards).unwrap_or_else(|e| {
                tracing::error!("Failed to render changelog: {e}");
                templates::notice_html(LOAD_FAILED)
            }),
            ChangelogView::Failed(notice) => notice.to_html(),
        }
    }
}

/// Build a card for a single release, applying the title and body fallbacks.
pub fn build_card(release: &Release, renderer: &dyn MarkupRenderer) -> ReleaseCard {
    ReleaseCard {
        title: release.display_name().unwrap_or(UNNAMED_RELEASE).to_string(),
        date: release
            .published_at
            .as_deref()
            .map_or_else(|| UNPUBLISHED.to_string(), format_release_date),
        body_html: match release.notes() {
            Some(body) => renderer.render(body),
            None => NO_DESCRIPTION.to_string(),
        },
    }
}

/// Fetch every release and turn it into cards, in API order.
///
/// Failures are logged and reported as a single error notice; nothing is
/// retried.
pub async fn load_changelog(
    source: &dyn ReleaseSource,
    renderer: &dyn MarkupRenderer,
) -> ChangelogView {
    match source.list_releases().await {
        Ok(releases) => {
            let cards: Vec<ReleaseCard> = releases
                .iter()
                .map(|release| build_card(release, renderer))
                .collect();
            tracing::info!("Loaded {} releases for the changelog", cards.len());
            ChangelogView::Cards(cards)
        }
        Err(e) => {
            tracing::error!("Error fetching releases: {e}");
            ChangelogView::Failed(ErrorNotice::new(LOAD_FAILED))
        }
    }
}

/// Load the changelog and replace the container's content with it.
///
/// Returns an error only when the container is missing from the page.
pub async fn render_changelog(
    source: &dyn ReleaseSource,
    renderer: &dyn MarkupRenderer,
    target: &ChangelogTarget,
    page: &mut dyn PageHost,
) -> Result<ChangelogView, AppError> {
    let view = load_changelog(source, renderer).await;
    page.replace_html(&target.container_id, &view.to_html())?;
    Ok(view)
}
