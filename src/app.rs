//! DocHub Frontend App
//!
//! Shell that switches between the docs viewer and the checklist tracker.

use leptos::prelude::*;

use crate::bindings;
use crate::checklist_tracker::ChecklistPage;
use crate::components::ToastHost;
use crate::context::ToastContext;
use crate::docs_viewer::DocsPage;

/// Top-level page selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Docs,
    Checklist,
}

impl Page {
    /// Page selected by a location hash (without `#`)
    pub fn from_hash(hash: Option<&str>) -> Self {
        match hash {
            Some("checklist") => Page::Checklist,
            _ => Page::Docs,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let initial = Page::from_hash(bindings::current_hash().as_deref());
    let (page, set_page) = signal(initial);

    // Provide context to all children
    provide_context(ToastContext::new());

    log::info!("[APP] starting on {:?}", initial);

    view! {
        <div class="app-layout">
            <nav class="page-switcher">
                <button
                    class=move || if page.get() == Page::Docs { "page-tab active" } else { "page-tab" }
                    on:click=move |_| set_page.set(Page::Docs)
                >
                    "Документация"
                </button>
                <button
                    class=move || if page.get() == Page::Checklist { "page-tab active" } else { "page-tab" }
                    on:click=move |_| set_page.set(Page::Checklist)
                >
                    "Чек-лист"
                </button>
            </nav>

            {move || match page.get() {
                Page::Docs => view! { <DocsPage /> }.into_any(),
                Page::Checklist => view! { <ChecklistPage /> }.into_any(),
            }}

            <ToastHost />
        </div>
    }
}
