use leptos::prelude::*;

use crate::config::Settings;
use crate::pages::badge::{badge_text, load_badge, BadgeView};
use crate::sources::releases::GithubReleaseSource;

const PENDING: &str = "Latest: ...";

/// Fetch the latest release once; every [`VersionBadge`] shares the result.
pub fn latest_release_resource(settings: Settings) -> LocalResource<BadgeView> {
    LocalResource::new(move || {
        let settings = settings.clone();
        async move {
            match GithubReleaseSource::from_settings(&settings.releases) {
                Ok(source) => load_badge(&source).await,
                Err(e) => {
                    tracing::error!("Error configuring release source: {e}");
                    BadgeView {
                        version: None,
                        text: badge_text(None),
                        updated: 0,
                    }
                }
            }
        }
    })
}

#[component]
pub fn VersionBadge(
    badge: LocalResource<BadgeView>,
    #[prop(optional, into)] extra_class: Option<String>,
) -> impl IntoView {
    let settings = use_context::<Settings>().unwrap_or_default();
    let class = match extra_class {
        Some(extra) => format!("{extra} {}", settings.elements.version_class),
        None => settings.elements.version_class,
    };

    view! {
        <span class=class>
            <Suspense fallback=|| PENDING>
                {move || Suspend::new(async move { badge.await.text })}
            </Suspense>
        </span>
    }
}
