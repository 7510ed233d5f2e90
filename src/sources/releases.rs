use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::config::ReleaseSettings;
use crate::error::AppError;
use crate::models::release::{LatestRelease, Release};

/// Trait for the public release API.
///
/// Abstracted as a trait so page logic can be tested without network access.
#[async_trait(?Send)]
pub trait ReleaseSource {
    /// Fetch every published release, newest first as reported by the API.
    async fn list_releases(&self) -> Result<Vec<Release>, AppError>;

    /// Fetch the single latest release.
    async fn latest_release(&self) -> Result<LatestRelease, AppError>;
}

/// GitHub Releases implementation of [`ReleaseSource`].
#[derive(Debug, Clone)]
pub struct GithubReleaseSource {
    client: reqwest::Client,
    list_url: String,
    latest_url: String,
    user_agent: String,
}

impl GithubReleaseSource {
    /// Create with explicit values (useful for testing / DI).
    pub fn new(list_url: String, latest_url: String, user_agent: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            list_url,
            latest_url,
            user_agent,
        }
    }

    /// Build the source from the `[releases]` settings, validating both URLs.
    pub fn from_settings(settings: &ReleaseSettings) -> Result<Self, AppError> {
        for url in [&settings.list_url, &settings.latest_url] {
            url::Url::parse(url)
                .map_err(|e| AppError::Config(format!("Invalid release URL '{url}': {e}")))?;
        }

        Ok(Self::new(
            settings.list_url.clone(),
            settings.latest_url.clone(),
            settings.user_agent.clone(),
        ))
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");

        #[cfg(not(target_arch = "wasm32"))]
        let request = request.header(reqwest::header::USER_AGENT, self.user_agent.as_str());

        request
    }
}

#[async_trait(?Send)]
impl ReleaseSource for GithubReleaseSource {
    async fn list_releases(&self) -> Result<Vec<Release>, AppError> {
        super::http::get_json(self.get(&self.list_url), &self.list_url).await
    }

    async fn latest_release(&self) -> Result<LatestRelease, AppError> {
        super::http::get_json(self.get(&self.latest_url), &self.latest_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_rejects_relative_url() {
        let settings = ReleaseSettings {
            list_url: "/releases".into(),
            ..ReleaseSettings::default()
        };
        match GithubReleaseSource::from_settings(&settings) {
            Err(AppError::Config(msg)) => assert!(msg.contains("/releases")),
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }

    #[test]
    fn test_from_settings_defaults() {
        let source = GithubReleaseSource::from_settings(&ReleaseSettings::default()).unwrap();
        assert!(source.list_url.ends_with("/releases"));
        assert!(source.latest_url.ends_with("/releases/latest"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let source = GithubReleaseSource::new(
            "http://127.0.0.1:1/releases".into(),
            "http://127.0.0.1:1/releases/latest".into(),
            "test".into(),
        );
        let err = source.latest_release().await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)), "got {err:?}");
    }
}
