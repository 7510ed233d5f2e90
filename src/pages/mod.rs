//! Page logic, separated from the hosts (CLI, browser) for testability.
//!
//! Each page follows the same shape: a `load_*` entry point that performs
//! the single fetch and builds a view, and a `render_*` entry point that
//! writes that view into explicitly named elements of a [`PageHost`].
//!
//! [`PageHost`]: crate::page::PageHost

pub mod badge;
pub mod changelog;
pub mod faq;
pub mod skeleton;

use crate::rendering::templates;

/// A static, non-interactive message shown in place of failed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub message: String,
}

impl ErrorNotice {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn to_html(&self) -> String {
        templates::notice_html(&self.message)
    }
}
