//! FAQ Accordion Component
//!
//! Single-open, collapsible question list.

use leptos::prelude::*;

use crate::docs::FaqEntry;
use crate::markdown::parse_markdown_inline;

/// Next open entry after clicking `index`; clicking the open entry collapses it
pub fn toggle_open(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[component]
pub fn FaqAccordion(entries: &'static [FaqEntry]) -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <div class="accordion">
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let is_open = move || open.get() == Some(index);
                    view! {
                        <div class="accordion-item">
                            <button
                                class="accordion-trigger"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| set_open.update(|o| *o = toggle_open(*o, index))
                            >
                                <span>{entry.question}</span>
                                <span class="chevron">{move || if is_open() { "▴" } else { "▾" }}</span>
                            </button>
                            <Show when=is_open>
                                <div class="accordion-content" inner_html=parse_markdown_inline(entry.answer)></div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
