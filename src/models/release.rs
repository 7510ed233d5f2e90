use serde::{Deserialize, Serialize};

/// A published release as returned by the release API.
///
/// Only the fields the pages consume are modelled; everything else in the
/// API payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// Human-readable release name. The API reports `null` or `""` when unset.
    #[serde(default)]
    pub name: Option<String>,
    /// Publish timestamp in RFC 3339 form (e.g. `2024-05-01T12:00:00Z`).
    /// Drafts have none.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Release notes in Markdown.
    #[serde(default)]
    pub body: Option<String>,
    /// Git tag of the release. Not shown on the changelog.
    #[serde(default)]
    pub tag_name: String,
}

impl Release {
    /// The release name, treating an empty string the same as a missing one.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// The release notes, treating an empty string the same as missing ones.
    pub fn notes(&self) -> Option<&str> {
        self.body.as_deref().filter(|body| !body.is_empty())
    }
}

/// The subset of the "latest release" payload used by the version badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestRelease {
    pub tag_name: String,
}
