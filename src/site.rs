//! Static site assembly: each page skeleton filled in by its renderer.

use crate::config::ElementSettings;
use crate::error::AppError;
use crate::page::StaticPage;
use crate::pages::badge::{render_badge, BadgeTarget, BadgeView};
use crate::pages::changelog::{render_changelog, ChangelogTarget, ChangelogView};
use crate::pages::faq::{render_faq, FaqOutcome, FaqTarget};
use crate::pages::skeleton;
use crate::rendering::markdown::MarkupRenderer;
use crate::sources::faq::FaqSource;
use crate::sources::releases::ReleaseSource;

pub const CHANGELOG_FILE: &str = "changelog.html";
pub const FAQ_FILE: &str = "faq.html";
pub const LANDING_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = skeleton::STYLESHEET;

#[cfg(feature = "native")]
const STYLESHEET_CSS: &str = include_str!("../public/style.css");

pub async fn build_changelog_page(
    source: &dyn ReleaseSource,
    renderer: &dyn MarkupRenderer,
    elements: &ElementSettings,
) -> Result<(StaticPage, ChangelogView), AppError> {
    let mut page = skeleton::changelog_page(elements);
    let view = render_changelog(source, renderer, &ChangelogTarget::from(elements), &mut page).await?;
    Ok((page, view))
}

pub async fn build_faq_page(
    source: &dyn FaqSource,
    renderer: &dyn MarkupRenderer,
    elements: &ElementSettings,
) -> Result<(StaticPage, FaqOutcome), AppError> {
    let mut page = skeleton::faq_page(elements);
    let outcome = render_faq(source, renderer, &FaqTarget::from(elements), &mut page).await?;
    Ok((page, outcome))
}

pub async fn build_landing_page(
    source: &dyn ReleaseSource,
    elements: &ElementSettings,
) -> (StaticPage, BadgeView) {
    let mut page = skeleton::landing_page(elements);
    let view = render_badge(source, &BadgeTarget::from(elements), &mut page).await;
    (page, view)
}

/// Summary of a full site build.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteReport {
    pub releases: Option<usize>,
    pub faq_questions: Option<usize>,
    pub version: Option<String>,
}

impl SiteReport {
    /// `true` when every page rendered its real content.
    pub fn is_complete(&self) -> bool {
        self.releases.is_some() && self.faq_questions.is_some() && self.version.is_some()
    }
}

/// Render all three pages concurrently and write them, along with the
/// stylesheet they link, into `out_dir`.
///
/// A page whose fetch fails is still written, showing its error notice.
#[cfg(feature = "native")]
pub async fn write_site(
    releases: &dyn ReleaseSource,
    faq: &dyn FaqSource,
    renderer: &dyn MarkupRenderer,
    elements: &ElementSettings,
    out_dir: &std::path::Path,
) -> Result<SiteReport, AppError> {
    let (changelog, faq_page, (landing, badge)) = tokio::join!(
        build_changelog_page(releases, renderer, elements),
        build_faq_page(faq, renderer, elements),
        build_landing_page(releases, elements),
    );
    let (changelog, changelog_view) = changelog?;
    let (faq_page, faq_outcome) = faq_page?;

    tokio::fs::create_dir_all(out_dir).await?;
    for (file, page) in [
        (CHANGELOG_FILE, &changelog),
        (FAQ_FILE, &faq_page),
        (LANDING_FILE, &landing),
    ] {
        let path = out_dir.join(file);
        tokio::fs::write(&path, page.to_html()).await.map_err(|e| {
            AppError::Io(format!("Failed to write '{}': {e}", path.display()))
        })?;
        tracing::info!("Wrote {}", path.display());
    }

    let stylesheet = out_dir.join(STYLESHEET_FILE);
    tokio::fs::write(&stylesheet, STYLESHEET_CSS)
        .await
        .map_err(|e| AppError::Io(format!("Failed to write '{}': {e}", stylesheet.display())))?;

    Ok(SiteReport {
        releases: match &changelog_view {
            ChangelogView::Cards(cards) => Some(cards.len()),
            ChangelogView::Failed(_) => None,
        },
        faq_questions: faq_outcome.view().map(|view| view.item_count()),
        version: badge.version,
    })
}
