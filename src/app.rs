use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::path;

use crate::components::changelog_view::Changelog;
use crate::components::faq_view::Faq;
use crate::components::version_badge::{latest_release_resource, VersionBadge};
use crate::config::{FaqSettings, Settings};

/// Where the FAQ document is served from, relative to the site root.
const FAQ_PATH: &str = "/faq.json";

/// Settings used in the browser, where the FAQ is a same-origin resource.
pub fn browser_settings() -> Settings {
    Settings {
        faq: FaqSettings {
            source: FAQ_PATH.to_string(),
        },
        ..Settings::default()
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(browser_settings());

    view! {
        <Stylesheet id="site" href="/style.css"/>
        <Title text="Game Client"/>

        <Router>
            <nav class="top-nav">
                <a href="/" class="logo">"Game Client"</a>
                <a href="/changelog">"Changelog"</a>
                <a href="/faq">"FAQ"</a>
            </nav>
            <main>
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/changelog") view=ChangelogPage/>
                    <Route path=path!("/faq") view=Faq/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    let settings = use_context::<Settings>().unwrap_or_default();
    let badge = latest_release_resource(settings);

    view! {
        <header class="hero">
            <VersionBadge badge=badge/>
            <h1>"Game Client"</h1>
            <p>"A modified client with quality-of-life features for competitive play."</p>
            <a class="download-button" href="/changelog">
                <VersionBadge badge=badge extra_class="download-version"/>
            </a>
        </header>
    }
}

#[component]
fn ChangelogPage() -> impl IntoView {
    view! {
        <h1>"Changelog"</h1>
        <Changelog/>
    }
}
