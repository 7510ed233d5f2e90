use leptos::prelude::*;

use crate::config::{ElementSettings, Settings};
use crate::error::AppError;
use crate::pages::faq::{load_faq, FaqOutcome, FaqView, ItemRef, LOAD_FAILED};
use crate::pages::skeleton::FAQ_HEADING;
use crate::pages::ErrorNotice;
use crate::rendering::markdown::MarkdownRenderer;
use crate::sources::faq::{resolve_same_origin, HttpFaqSource};

/// Absolute URL of the FAQ document; relative paths resolve against the
/// page origin.
fn faq_url(source: &str) -> Result<String, AppError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return Ok(source.to_string());
    }
    let origin = window()
        .location()
        .origin()
        .map_err(|_| AppError::Config("page origin is unavailable".into()))?;
    resolve_same_origin(&origin, source)
}

/// Click handler of a question: flips that pair only.
fn toggle_entry(faq: RwSignal<FaqView>, at: ItemRef) {
    faq.update(|view| {
        view.toggle(at);
    });
}

fn entry_class(faq: RwSignal<FaqView>, at: ItemRef) -> &'static str {
    if faq.with(|view| view.is_active(at)) {
        "faq-item active"
    } else {
        "faq-item"
    }
}

/// Heading and description to show; the static skeleton's until a document
/// has loaded.
fn heading(outcome: Option<&FaqOutcome>) -> (String, String) {
    match outcome.and_then(FaqOutcome::view) {
        Some(view) => (view.title.clone(), view.description.clone()),
        None => (FAQ_HEADING.to_string(), String::new()),
    }
}

/// Title, description and content container, present in every state so the
/// page exposes the same elements as the static FAQ.
fn faq_layout(
    elements: &ElementSettings,
    title: String,
    description: String,
    content: AnyView,
) -> AnyView {
    view! {
        <h1 id=elements.faq_title.clone()>{title}</h1>
        <p id=elements.faq_description.clone()>{description}</p>
        <div id=elements.faq_content.clone()>{content}</div>
    }
    .into_any()
}

#[component]
pub fn Faq() -> impl IntoView {
    let settings = use_context::<Settings>().unwrap_or_default();
    let elements = settings.elements.clone();

    let faq = LocalResource::new(move || {
        let settings = settings.clone();
        async move {
            let renderer = MarkdownRenderer::new(settings.markup.policy);
            match faq_url(&settings.faq.source) {
                Ok(url) => load_faq(&HttpFaqSource::new(url), &renderer).await,
                Err(e) => {
                    tracing::error!("Error resolving FAQ location: {e}");
                    FaqOutcome::Failed(ErrorNotice::new(LOAD_FAILED))
                }
            }
        }
    });

    let loading_elements = elements.clone();

    view! {
        <Suspense fallback=move || {
            let (title, description) = heading(None);
            faq_layout(
                &loading_elements,
                title,
                description,
                view! { <p class="loading">"Loading..."</p> }.into_any(),
            )
        }>
            {move || {
                let elements = elements.clone();
                Suspend::new(async move {
                    let outcome = faq.await;
                    let (title, description) = heading(Some(&outcome));
                    let content = match outcome {
                        FaqOutcome::Loaded(loaded) => {
                            let sections = loaded.sections.len();
                            let state = RwSignal::new(loaded);
                            (0..sections)
                                .map(|section| view! { <FaqCategory faq=state section=section/> })
                                .collect_view()
                                .into_any()
                        }
                        FaqOutcome::Failed(notice) => {
                            view! { <p class="error-notice">{notice.message}</p> }.into_any()
                        }
                    };
                    faq_layout(&elements, title, description, content)
                })
            }}
        </Suspense>
    }
}

#[component]
fn FaqCategory(faq: RwSignal<FaqView>, section: usize) -> impl IntoView {
    let (title, items) = faq.with_untracked(|view| {
        view.sections
            .get(section)
            .map_or((String::new(), 0), |s| (s.title.clone(), s.items.len()))
    });

    view! {
        <section class="faq-category">
            <h2 class="faq-category-title">{title}</h2>
            {(0..items)
                .map(|item| view! { <FaqEntry faq=faq at=ItemRef::new(section, item)/> })
                .collect_view()}
        </section>
    }
}

/// One question/answer pair; its display state lives in the shared view.
#[component]
fn FaqEntry(faq: RwSignal<FaqView>, at: ItemRef) -> impl IntoView {
    let (question, answer_html) = faq.with_untracked(|view| {
        view.item(at)
            .map(|item| (item.question.clone(), item.answer_html.clone()))
            .unwrap_or_default()
    });

    view! {
        <div class=move || entry_class(faq, at)>
            <div class="faq-question" on:click=move |_| toggle_entry(faq, at)>
                <span>{question}</span>
                <span class="faq-toggle">"+"</span>
            </div>
            <div class="faq-answer" inner_html=answer_html></div>
        </div>
    }
}
