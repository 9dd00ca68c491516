//! Docs Sidebar Component
//!
//! Brand block and the section menu with the active entry highlighted.

use leptos::prelude::*;

use crate::components::Icon;
use crate::docs::{SectionId, VERSION};

#[component]
pub fn DocsSidebar(
    active: ReadSignal<SectionId>,
    #[prop(into)] on_navigate: Callback<SectionId>,
) -> impl IntoView {
    view! {
        <div class="sidebar-content">
            <div class="sidebar-brand">
                <h2>"Документация"</h2>
                <p class="muted">{format!("Версия {}", VERSION)}</p>
            </div>
            <hr class="separator" />
            <nav class="sidebar-nav">
                {SectionId::ALL
                    .into_iter()
                    .map(|id| {
                        view! {
                            <button
                                class=move || if active.get() == id { "nav-item active" } else { "nav-item" }
                                on:click=move |_| on_navigate.run(id)
                            >
                                <Icon name=id.menu_icon() />
                                <span>{id.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
