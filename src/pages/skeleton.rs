//! Static page skeletons and the element contract they expose.

use crate::config::ElementSettings;
use crate::page::{Element, StaticPage};

use super::badge::BadgeTarget;
use super::changelog::ChangelogTarget;
use super::faq::FaqTarget;

pub const LOADING: &str = "<p class=\"loading\">Loading...</p>";
pub const FAQ_HEADING: &str = "FAQ";

/// Stylesheet every page links, relative to the page.
pub const STYLESHEET: &str = "style.css";

/// Toggles `active` on the `.faq-item` whose question was clicked.
pub const FAQ_TOGGLE_SCRIPT: &str = include_str!("../../templates/faq_toggle.js");

impl From<&ElementSettings> for ChangelogTarget {
    fn from(elements: &ElementSettings) -> Self {
        Self {
            container_id: elements.changelog_container.clone(),
        }
    }
}

impl From<&ElementSettings> for FaqTarget {
    fn from(elements: &ElementSettings) -> Self {
        Self {
            title_id: elements.faq_title.clone(),
            description_id: elements.faq_description.clone(),
            content_id: elements.faq_content.clone(),
        }
    }
}

impl From<&ElementSettings> for BadgeTarget {
    fn from(elements: &ElementSettings) -> Self {
        Self {
            class: elements.version_class.clone(),
        }
    }
}

/// The changelog page before any release has been fetched.
pub fn changelog_page(elements: &ElementSettings) -> StaticPage {
    StaticPage::new("Changelog")
        .with_stylesheet(STYLESHEET)
        .with_element(Element::new("h1").text("Changelog"))
        .with_element(
            Element::new("div")
                .id(&elements.changelog_container)
                .html(LOADING),
        )
}

/// The FAQ page before the document has been fetched.
pub fn faq_page(elements: &ElementSettings) -> StaticPage {
    StaticPage::new(FAQ_HEADING)
        .with_stylesheet(STYLESHEET)
        .with_element(Element::new("h1").id(&elements.faq_title).text(FAQ_HEADING))
        .with_element(Element::new("p").id(&elements.faq_description).text(""))
        .with_element(Element::new("div").id(&elements.faq_content).html(LOADING))
        .with_script(FAQ_TOGGLE_SCRIPT)
}

/// The landing page: a header badge and a download button both show the
/// latest version.
pub fn landing_page(elements: &ElementSettings) -> StaticPage {
    StaticPage::new("Home")
        .with_stylesheet(STYLESHEET)
        .with_element(
            Element::new("span")
                .class(&elements.version_class)
                .text("Latest: ..."),
        )
        .with_element(Element::new("h1").text("Game Client"))
        .with_element(
            Element::new("a")
                .class("download-button")
                .class(&elements.version_class)
                .text("Latest: ..."),
        )
}
