//! Category Navigation Component
//!
//! Category anchors with live per-category progress.

use checklist_core::CATEGORIES;
use leptos::prelude::*;

use crate::components::Icon;
use crate::store::{use_checklist_store, ChecklistStateStoreFields};

#[component]
pub fn CategoryNav(#[prop(into)] on_navigate: Callback<&'static str>) -> impl IntoView {
    let store = use_checklist_store();

    view! {
        <nav class="category-nav">
            <h2 class="sidebar-heading">"Категории"</h2>
            {CATEGORIES
                .iter()
                .map(|category| {
                    let id = category.id;
                    view! {
                        <a
                            href=category.anchor()
                            class=format!("nav-item color-{}", category.color)
                            on:click=move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                on_navigate.run(id);
                            }
                        >
                            <Icon name=category.icon />
                            <span class="nav-label">{category.label}</span>
                            <span class="nav-progress">
                                {move || format!("{}%", store.tracker().read().category_progress(id))}
                            </span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
