//! Page Title Bar Component
//!
//! Sticky header with the menu button (mobile), page name, optional badge
//! and page-specific actions on the right.

use leptos::prelude::*;

use crate::components::Icon;

/// Sticky page header
#[component]
pub fn TitleBar(
    #[prop(into)] title: String,
    #[prop(optional, into)] badge: Option<String>,
    /// Opens the mobile navigation drawer
    #[prop(into)] on_menu: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <header class="titlebar">
            <div class="titlebar-left">
                <button
                    class="titlebar-btn menu mobile-only"
                    title="Меню"
                    on:click=move |_| on_menu.run(())
                >
                    <Icon name="Menu" />
                </button>
                <h1 class="titlebar-title">{title}</h1>
                {badge.map(|text| view! { <span class="badge tone-secondary desktop-only">{text}</span> })}
            </div>
            <div class="titlebar-controls">
                {children()}
            </div>
        </header>
    }
}
