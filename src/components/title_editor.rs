//! Title Editor Component
//!
//! Checklist heading that turns into an input on click.
//! Enter or blur commits, Escape cancels.

use leptos::html;
use leptos::prelude::*;

use crate::store::{
    store_begin_title_edit, store_cancel_title_edit, store_rename_title, use_checklist_store,
    ChecklistStateStoreFields,
};

#[component]
pub fn TitleEditor() -> impl IntoView {
    let store = use_checklist_store();
    let (draft, set_draft) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let begin = move |_| {
        set_draft.set(store.tracker().read_untracked().document().title.clone());
        store_begin_title_edit(&store);
    };
    let commit = move || store_rename_title(&store, draft.get_untracked());
    let cancel = move || store_cancel_title_edit(&store);

    // Focus the input once it is mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    view! {
        <Show
            when=move || store.editing_title().get()
            fallback=move || view! {
                <h1 class="checklist-title" title="Нажмите, чтобы изменить" on:click=begin>
                    {move || store.tracker().read().document().title.clone()}
                </h1>
            }
        >
            <input
                node_ref=input_ref
                class="checklist-title-input"
                type="text"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:blur=move |_| commit()
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "Enter" => commit(),
                    "Escape" => cancel(),
                    _ => {}
                }
            />
        </Show>
    }
}
