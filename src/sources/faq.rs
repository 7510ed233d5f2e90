use async_trait::async_trait;

use crate::error::AppError;
use crate::models::faq::FaqDocument;

/// Trait for loading the FAQ document.
#[async_trait(?Send)]
pub trait FaqSource {
    async fn load_document(&self) -> Result<FaqDocument, AppError>;
}

/// Loads the FAQ document over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFaqSource {
    client: reqwest::Client,
    url: String,
}

impl HttpFaqSource {
    /// `url` must be absolute; see [`resolve_same_origin`] for page-relative paths.
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait(?Send)]
impl FaqSource for HttpFaqSource {
    async fn load_document(&self) -> Result<FaqDocument, AppError> {
        super::http::get_json(self.client.get(&self.url), &self.url).await
    }
}

/// Resolve a same-origin resource path (e.g. `/faq.json`) against the page origin.
pub fn resolve_same_origin(origin: &str, path: &str) -> Result<String, AppError> {
    let base = url::Url::parse(origin)
        .map_err(|e| AppError::Config(format!("Invalid page origin '{origin}': {e}")))?;
    base.join(path)
        .map(String::from)
        .map_err(|e| AppError::Config(format!("Invalid FAQ path '{path}': {e}")))
}

/// Reads the FAQ document from the local filesystem, for offline site builds.
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub struct FileFaqSource {
    path: std::path::PathBuf,
}

#[cfg(feature = "native")]
impl FileFaqSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl FaqSource for FileFaqSource {
    async fn load_document(&self) -> Result<FaqDocument, AppError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to read '{}': {e}", self.path.display())))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Pick a source for the configured FAQ location: `http(s)` URLs are
/// fetched, anything else is read from disk.
#[cfg(feature = "native")]
pub fn faq_source_for(location: &str) -> Box<dyn FaqSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpFaqSource::new(location.to_string()))
    } else {
        Box::new(FileFaqSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_same_origin() {
        assert_eq!(
            resolve_same_origin("https://client.example.org", "/faq.json").unwrap(),
            "https://client.example.org/faq.json"
        );
        assert_eq!(
            resolve_same_origin("https://client.example.org/docs/", "data/faq.json").unwrap(),
            "https://client.example.org/docs/data/faq.json"
        );
    }

    #[test]
    fn test_resolve_same_origin_rejects_bad_origin() {
        assert!(matches!(
            resolve_same_origin("not an origin", "/faq.json"),
            Err(AppError::Config(_))
        ));
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_file_source_reads_document() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title": "FAQ", "description": "d", "categories": [{{"title": "General", "questions": [{{"question": "Q", "answer": "A"}}]}}]}}"#
        )
        .unwrap();

        let doc = FileFaqSource::new(file.path()).load_document().await.unwrap();
        assert_eq!(doc.title, "FAQ");
        assert_eq!(doc.categories[0].questions[0].answer, "A");
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let err = FileFaqSource::new("/nonexistent/faq.json")
            .load_document()
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_file_source_malformed_is_decode_error() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"title": "FAQ", "description": "d"}}"#).unwrap();

        let err = FileFaqSource::new(file.path())
            .load_document()
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
