//! Checklist Tracker Page
//!
//! Categorized tasks with progress, localStorage persistence and PDF export.

use checklist_core::CATEGORIES;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::bindings;
use crate::components::{
    CategoryCard, CategoryNav, ConfirmButton, Icon, MobileDrawer, ProgressBar, TitleBar, TitleEditor,
};
use crate::context::use_toasts;
use crate::store::{
    store_export, store_reset_all, store_set_menu_open, ChecklistState, ChecklistStateStoreFields,
};

#[component]
pub fn ChecklistPage() -> impl IntoView {
    let store = Store::new(ChecklistState::load());
    provide_context(store);
    let toasts = use_toasts();

    let overall = Signal::derive(move || store.tracker().read().overall_progress());
    let counts = move || {
        let tracker = store.tracker().read();
        let doc = tracker.document();
        format!("{} из {} задач выполнено", doc.completed_count(), doc.items.len())
    };

    let navigate_to = Callback::new(move |category_id: &'static str| {
        store_set_menu_open(&store, false);
        bindings::scroll_into_view(category_id);
    });

    let export = move |_| match store_export(&store) {
        Ok(report) => {
            toasts.success(format!("PDF сохранён: {}", report.summary.filename));
            if !report.unicode_font {
                toasts.error("Шрифт с кириллицей не загрузился, текст в PDF может быть нечитаемым");
            }
        }
        Err(e) => {
            log::error!("[EXPORT] {}", e);
            toasts.error(format!("Не удалось создать PDF: {}", e));
        }
    };

    view! {
        <div class="checklist-page">
            <TitleBar title="Чек-лист" on_menu=move |_| store_set_menu_open(&store, true)>
                <button class="btn tone-primary" on:click=export>
                    <Icon name="FileDown" />
                    <span>"Экспорт в PDF"</span>
                </button>
                <ConfirmButton
                    label="Сбросить"
                    prompt="Сбросить весь прогресс?"
                    button_class="btn tone-outline"
                    on_confirm=move |_| store_reset_all(&store)
                />
            </TitleBar>

            <MobileDrawer
                open=Signal::derive(move || store.menu_open().get())
                on_close=move |_| store_set_menu_open(&store, false)
            >
                <CategoryNav on_navigate=navigate_to />
            </MobileDrawer>

            <div class="page-layout">
                <aside class="sidebar desktop-only">
                    <CategoryNav on_navigate=navigate_to />
                </aside>
                <main class="checklist-content">
                    <TitleEditor />
                    <div class="card overall-progress">
                        <div class="overall-progress-heading">
                            <span>"Общий прогресс"</span>
                            <span class="overall-progress-value">{move || format!("{}%", overall.get())}</span>
                        </div>
                        <ProgressBar value=overall />
                        <p class="muted">{counts}</p>
                    </div>
                    {CATEGORIES.iter().map(|category| view! { <CategoryCard category=category /> }).collect_view()}
                </main>
            </div>
        </div>
    }
}
