#![allow(dead_code)]

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use clientdocs::sources::faq::HttpFaqSource;
use clientdocs::sources::releases::GithubReleaseSource;

/// A local HTTP server standing in for the release API and the static FAQ file.
///
/// The server task lives for the rest of the test runtime.
pub struct FakeApi {
    addr: SocketAddr,
}

impl FakeApi {
    pub async fn start(router: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake API listener");
        let addr = listener.local_addr().expect("Failed to read listener address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Fake API server failed");
        });

        Self { addr }
    }

    /// Serve the sample releases, latest release and FAQ document.
    pub async fn healthy() -> Self {
        Self::start(
            Router::new()
                .route("/releases", get(|| async { Json(sample_releases()) }))
                .route("/releases/latest", get(|| async { Json(latest_release("v1.4.2")) }))
                .route("/faq.json", get(|| async { Json(sample_faq()) })),
        )
        .await
    }

    /// Answer every request with `status`.
    pub async fn failing(status: StatusCode) -> Self {
        Self::start(Router::new().fallback(move || async move { status })).await
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn release_source(&self) -> GithubReleaseSource {
        GithubReleaseSource::new(
            self.url("/releases"),
            self.url("/releases/latest"),
            "clientdocs-tests".to_string(),
        )
    }

    pub fn faq_source(&self) -> HttpFaqSource {
        HttpFaqSource::new(self.url("/faq.json"))
    }
}

pub fn sample_releases() -> Value {
    json!([
        {
            "tag_name": "v1.4.2",
            "name": "Bind wheel fixes",
            "published_at": "2024-05-01T12:00:00Z",
            "body": "## Fixes\n\n- Bind wheel no longer sticks\n- <script>alert('x')</script>Safer notes",
            "draft": false,
            "prerelease": false
        },
        {
            "tag_name": "v1.4.1",
            "name": null,
            "published_at": "2024-04-12T09:30:00Z",
            "body": "Small hotfix."
        },
        {
            "tag_name": "v1.4.0",
            "name": "Spring update",
            "published_at": "2024-03-20T18:00:00Z",
            "body": null
        }
    ])
}

pub fn latest_release(tag: &str) -> Value {
    json!({
        "tag_name": tag,
        "name": "Latest",
        "published_at": "2024-05-01T12:00:00Z",
        "body": "notes"
    })
}

pub fn sample_faq() -> Value {
    json!({
        "title": "Frequently Asked Questions",
        "description": "Answers to common questions",
        "categories": [
            {
                "title": "Installation",
                "questions": [
                    {"question": "Where can I download the client?", "answer": "From the **changelog** page."},
                    {"question": "Which platforms are supported?", "answer": "Windows, Linux and macOS."}
                ]
            },
            {
                "title": "Troubleshooting",
                "questions": [
                    {"question": "The game crashes on start", "answer": "Try the `OpenGL` backend."}
                ]
            }
        ]
    })
}
