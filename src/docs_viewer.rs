//! Docs Viewer Page
//!
//! Static documentation sections with a click-driven navigation menu.

use leptos::prelude::*;

use crate::bindings;
use crate::components::{DocSectionView, DocsSidebar, Icon, MobileDrawer, TitleBar};
use crate::docs::{SectionId, PRODUCT_NAME, SECTIONS, VERSION};

#[component]
pub fn DocsPage() -> impl IntoView {
    // `#faq` style deep links preselect the menu entry
    let initial = bindings::current_hash()
        .as_deref()
        .and_then(SectionId::from_str)
        .unwrap_or_default();
    let (active_section, set_active_section) = signal(initial);
    let (menu_open, set_menu_open) = signal(false);

    // Activate, close the drawer, then scroll
    let navigate_to = Callback::new(move |id: SectionId| {
        set_active_section.set(id);
        set_menu_open.set(false);
        bindings::scroll_into_view(id.as_str());
    });

    view! {
        <div class="docs-page">
            <TitleBar
                title=PRODUCT_NAME
                badge=format!("v{}", VERSION)
                on_menu=move |_| set_menu_open.set(true)
            >
                <button class="titlebar-btn" title="GitHub">
                    <Icon name="Github" />
                </button>
                <button class="titlebar-btn" title="Тема">
                    <Icon name="Moon" />
                </button>
            </TitleBar>

            <MobileDrawer open=menu_open on_close=move |_| set_menu_open.set(false)>
                <DocsSidebar active=active_section on_navigate=navigate_to />
            </MobileDrawer>

            <div class="page-layout">
                <aside class="sidebar desktop-only">
                    <DocsSidebar active=active_section on_navigate=navigate_to />
                </aside>
                <main class="docs-content">
                    {SECTIONS.iter().map(|section| view! { <DocSectionView section=section /> }).collect_view()}
                </main>
            </div>
        </div>
    }
}
