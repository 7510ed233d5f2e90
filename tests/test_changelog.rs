mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use clientdocs::config::ElementSettings;
use clientdocs::pages::changelog::{ChangelogView, NO_DESCRIPTION, UNNAMED_RELEASE, UNPUBLISHED};
use clientdocs::rendering::markdown::{MarkdownRenderer, SanitizePolicy};
use clientdocs::site::build_changelog_page;

fn container_html(page: &clientdocs::page::StaticPage) -> String {
    let elements = ElementSettings::default();
    page.element(&elements.changelog_container)
        .expect("changelog container")
        .inner_html()
}

#[tokio::test]
async fn changelog_renders_every_release_in_order() {
    let api = common::FakeApi::healthy().await;
    let renderer = MarkdownRenderer::default();

    let (page, view) =
        build_changelog_page(&api.release_source(), &renderer, &ElementSettings::default())
            .await
            .unwrap();

    let titles: Vec<&str> = view.cards().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Bind wheel fixes", UNNAMED_RELEASE, "Spring update"]);

    let dates: Vec<&str> = view.cards().iter().map(|c| c.date.as_str()).collect();
    assert_eq!(dates, vec!["May 1, 2024", "April 12, 2024", "March 20, 2024"]);

    assert_eq!(view.cards()[2].body_html, NO_DESCRIPTION);

    let html = container_html(&page);
    assert_eq!(html.matches("class=\"release-card\"").count(), 3);
    assert!(html.contains("<h2>Fixes</h2>"));
    assert!(!html.contains("Loading..."));
}

#[tokio::test]
async fn changelog_sanitizes_release_notes() {
    let api = common::FakeApi::healthy().await;
    let renderer = MarkdownRenderer::new(SanitizePolicy::Sanitize);

    let (page, _) =
        build_changelog_page(&api.release_source(), &renderer, &ElementSettings::default())
            .await
            .unwrap();

    let html = container_html(&page);
    assert!(!html.contains("<script>"));
    assert!(html.contains("Safer notes"));
}

#[tokio::test]
async fn changelog_http_error_shows_single_notice() {
    let api = common::FakeApi::failing(StatusCode::INTERNAL_SERVER_ERROR).await;

    let (page, view) = build_changelog_page(
        &api.release_source(),
        &MarkdownRenderer::default(),
        &ElementSettings::default(),
    )
    .await
    .unwrap();

    assert!(matches!(view, ChangelogView::Failed(_)));
    let html = container_html(&page);
    assert_eq!(html.matches("class=\"error-notice\"").count(), 1);
    assert!(!html.contains("release-card"));
}

#[tokio::test]
async fn changelog_malformed_payload_shows_notice() {
    let api = common::FakeApi::start(
        Router::new().route("/releases", get(|| async { "{\"not\": \"a list\"}" })),
    )
    .await;

    let (page, view) = build_changelog_page(
        &api.release_source(),
        &MarkdownRenderer::default(),
        &ElementSettings::default(),
    )
    .await
    .unwrap();

    assert!(view.cards().is_empty());
    assert_eq!(
        container_html(&page).matches("class=\"error-notice\"").count(),
        1
    );
}

#[tokio::test]
async fn changelog_keeps_drafts_without_publish_date() {
    let api = common::FakeApi::start(Router::new().route(
        "/releases",
        get(|| async {
            axum::Json(serde_json::json!([
                {"name": "Draft", "draft": true, "published_at": null, "body": "wip"},
                {"name": "v1", "published_at": "2024-05-01T12:00:00Z", "body": "notes"}
            ]))
        }),
    ))
    .await;

    let (_, view) = build_changelog_page(
        &api.release_source(),
        &MarkdownRenderer::default(),
        &ElementSettings::default(),
    )
    .await
    .unwrap();

    let dates: Vec<&str> = view.cards().iter().map(|c| c.date.as_str()).collect();
    assert_eq!(dates, vec![UNPUBLISHED, "May 1, 2024"]);
}
