//! Typed settings with layered precedence (defaults → file → environment).

use serde::{Deserialize, Serialize};

use crate::rendering::markdown::SanitizePolicy;

pub const DEFAULT_RELEASES_URL: &str =
    "https://api.github.com/repos/sjrc6/TaterClient-ddnet/releases";
pub const DEFAULT_LATEST_RELEASE_URL: &str =
    "https://api.github.com/repos/sjrc6/TaterClient-ddnet/releases/latest";
pub const DEFAULT_USER_AGENT: &str = concat!("clientdocs/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_FAQ_SOURCE: &str = "public/faq.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub releases: ReleaseSettings,
    pub faq: FaqSettings,
    pub markup: MarkupSettings,
    pub elements: ElementSettings,
    pub logging: LoggingSettings,
}

/// Endpoints of the public release API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseSettings {
    pub list_url: String,
    pub latest_url: String,
    /// Sent on native builds only; browsers do not allow overriding it.
    pub user_agent: String,
}

impl Default for ReleaseSettings {
    fn default() -> Self {
        Self {
            list_url: DEFAULT_RELEASES_URL.to_string(),
            latest_url: DEFAULT_LATEST_RELEASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqSettings {
    /// A file path, an absolute `http(s)` URL, or (in the browser) a
    /// same-origin path such as `/faq.json`.
    pub source: String,
}

impl Default for FaqSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_FAQ_SOURCE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupSettings {
    pub policy: SanitizePolicy,
}

/// Element ids and classes the pages expose to the renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSettings {
    pub changelog_container: String,
    pub faq_title: String,
    pub faq_description: String,
    pub faq_content: String,
    /// Marker class carried by every element showing the latest version.
    pub version_class: String,
}

impl Default for ElementSettings {
    fn default() -> Self {
        Self {
            changelog_container: "changelog-container".to_string(),
            faq_title: "faq-title".to_string(),
            faq_description: "faq-description".to_string(),
            faq_content: "faq-content".to_string(),
            version_class: "version-display".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "clientdocs=info".to_string(),
        }
    }
}

#[cfg(feature = "native")]
impl Settings {
    /// Load settings from the built-in defaults, an optional TOML file and
    /// `CLIENTDOCS__*` environment variables, in increasing precedence.
    ///
    /// Nested keys use a double underscore, e.g.
    /// `CLIENTDOCS__RELEASES__LIST_URL`.
    pub fn load(file: Option<&std::path::Path>) -> Result<Self, crate::error::AppError> {
        use config::{Config, Environment, File};

        use crate::error::AppError;

        let defaults = Config::try_from(&Settings::default())
            .map_err(|e| AppError::Config(format!("invalid defaults: {e}")))?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("CLIENTDOCS")
                .prefix_separator("__")
                .separator("__"),
        );

        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Settings>())
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
