//! Category Card Component
//!
//! One category's progress and its items with checkboxes.

use checklist_core::{Category, ChecklistItem};
use leptos::prelude::*;

use crate::components::{Icon, ProgressBar};
use crate::store::{store_toggle_item, use_checklist_store, ChecklistStateStoreFields};

#[component]
pub fn CategoryCard(category: &'static Category) -> impl IntoView {
    let store = use_checklist_store();
    let id = category.id;

    let items = move || {
        store
            .tracker()
            .read()
            .document()
            .items_in(id)
            .cloned()
            .collect::<Vec<ChecklistItem>>()
    };
    let progress = Signal::derive(move || store.tracker().read().category_progress(id));

    view! {
        <section id=id class=format!("category-card color-{}", category.color)>
            <header class="category-header">
                <Icon name=category.icon />
                <h2>{category.label}</h2>
                <span class="category-progress">{move || format!("{}%", progress.get())}</span>
            </header>
            <ProgressBar value=progress />
            <ul class="item-list">
                <For
                    each=items
                    key=|item| (item.id.clone(), item.checked)
                    children=move |item| {
                        let item_id = item.id.clone();
                        view! {
                            <li class=if item.checked { "checklist-item checked" } else { "checklist-item" }>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=item.checked
                                        on:change=move |_| store_toggle_item(&store, &item_id)
                                    />
                                    <div class="item-text">
                                        <span class="item-title">{item.title}</span>
                                        <p class="item-description">{item.description}</p>
                                    </div>
                                </label>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
