use std::sync::LazyLock;

use regex::Regex;

use crate::page::PageHost;
use crate::sources::releases::ReleaseSource;

pub const UNKNOWN_VERSION: &str = "Unknown";

static SEMVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?(\d+\.\d+\.\d+)").expect("valid version pattern"));

/// Marker class of the elements showing the latest version.
#[derive(Debug, Clone)]
pub struct BadgeTarget {
    pub class: String,
}

/// Outcome of a badge update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    /// Extracted version, or `None` when the latest release could not be loaded.
    pub version: Option<String>,
    /// Text written into every badge element.
    pub text: String,
    /// Number of elements updated.
    pub updated: usize,
}

/// Extract `MAJOR.MINOR.PATCH` from a release tag, dropping a leading `v`.
///
/// Tags without a semantic version are returned unchanged.
pub fn extract_version(tag: &str) -> String {
    SEMVER
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| tag.to_string(), |m| m.as_str().to_string())
}

pub fn badge_text(version: Option<&str>) -> String {
    format!("Latest: {}", version.unwrap_or(UNKNOWN_VERSION))
}

/// Fetch the latest release and compute the badge text.
pub async fn load_badge(source: &dyn ReleaseSource) -> BadgeView {
    let version = match source.latest_release().await {
        Ok(latest) => Some(extract_version(&latest.tag_name)),
        Err(e) => {
            tracing::error!("Error fetching latest release: {e}");
            None
        }
    };

    BadgeView {
        text: badge_text(version.as_deref()),
        version,
        updated: 0,
    }
}

/// Fetch the latest release and write the badge into every marked element.
pub async fn render_badge(
    source: &dyn ReleaseSource,
    target: &BadgeTarget,
    page: &mut dyn PageHost,
) -> BadgeView {
    let mut view = load_badge(source).await;
    view.updated = page.set_text_by_class(&target.class, &view.text);
    if view.updated == 0 {
        tracing::warn!("No elements with class '{}' to show the version", target.class);
    }
    view
}
