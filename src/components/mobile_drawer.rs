//! Mobile Drawer Component
//!
//! Left slide-in panel holding the navigation on small screens.

use leptos::prelude::*;

#[component]
pub fn MobileDrawer(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="drawer-backdrop" on:click=move |_| on_close.run(())></div>
            <aside class="drawer">
                <button class="drawer-close" title="Закрыть" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                {children()}
            </aside>
        </Show>
    }
}
