pub mod app;
pub mod config;
pub mod error;
pub mod page;
pub mod pages;
pub mod site;
pub mod models {
    pub mod faq;
    pub mod release;
}
pub mod rendering {
    pub mod date;
    pub mod markdown;
    pub mod templates;
}
pub mod sources {
    mod http;
    pub mod faq;
    pub mod releases;
}
pub mod components {
    pub mod changelog_view;
    pub mod faq_view;
    pub mod version_badge;
}

/// WASM entry point: mount the site once the module is loaded.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
