use leptos::prelude::*;

use crate::config::Settings;
use crate::pages::changelog::{load_changelog, ChangelogView, LOAD_FAILED};
use crate::pages::ErrorNotice;
use crate::rendering::markdown::MarkdownRenderer;
use crate::sources::releases::GithubReleaseSource;

#[component]
pub fn Changelog() -> impl IntoView {
    let settings = use_context::<Settings>().unwrap_or_default();
    let container_id = settings.elements.changelog_container.clone();

    let changelog = LocalResource::new(move || {
        let settings = settings.clone();
        async move {
            let renderer = MarkdownRenderer::new(settings.markup.policy);
            match GithubReleaseSource::from_settings(&settings.releases) {
                Ok(source) => load_changelog(&source, &renderer).await,
                Err(e) => {
                    tracing::error!("Error configuring release source: {e}");
                    ChangelogView::Failed(ErrorNotice::new(LOAD_FAILED))
                }
            }
        }
    });

    view! {
        <div id=container_id>
            <Suspense fallback=|| view! { <p class="loading">"Loading..."</p> }>
                {move || Suspend::new(async move {
                    match changelog.await {
                        ChangelogView::Cards(cards) => cards
                            .into_iter()
                            .map(|card| view! {
                                <article class="release-card">
                                    <h2 class="release-title">{card.title}</h2>
                                    <p class="release-date">{card.date}</p>
                                    <div class="release-body" inner_html=card.body_html></div>
                                </article>
                            })
                            .collect_view()
                            .into_any(),
                        ChangelogView::Failed(notice) => view! {
                            <p class="error-notice">{notice.message}</p>
                        }
                        .into_any(),
                    }
                })}
            </Suspense>
        </div>
    }
}
